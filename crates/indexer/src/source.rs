use crate::error::{IndexerError, Result};
use std::fs;
use std::path::Path;

/// Read a file as text, replacing invalid UTF-8 instead of failing.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| IndexerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Count lines the way a text-mode reader sees them: `\n`, `\r\n` and a bare
/// `\r` each end a line, and a trailing fragment without terminator counts.
pub fn count_lines(content: &str) -> usize {
    let bytes = content.as_bytes();
    let mut lines = 0;
    let mut i = 0;
    let mut pending = false;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines += 1;
                pending = false;
            }
            b'\r' => {
                lines += 1;
                pending = false;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => pending = true,
        }
        i += 1;
    }

    if pending {
        lines += 1;
    }
    lines
}
