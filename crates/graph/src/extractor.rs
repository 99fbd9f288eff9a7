use crate::error::Result;
use context_indexer::read_source;
use std::collections::BTreeSet;
use std::path::Path;

/// Strategy for pulling referenced module names out of a source file.
///
/// Implementations only see file contents; resolution of names to files is
/// left to the scorer's loose matching.
pub trait DependencyExtractor: Send + Sync {
    /// Module names referenced by `content`
    fn extract(&self, content: &str) -> BTreeSet<String>;

    /// Read `path` (invalid UTF-8 replaced) and extract from its contents
    fn extract_file(&self, path: &Path) -> Result<BTreeSet<String>> {
        let content = read_source(path)?;
        Ok(self.extract(&content))
    }
}

/// Line-prefix heuristics covering Python imports and quoted JS/TS-style
/// imports. No parsing: comments and string literals are matched too.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicExtractor;

impl DependencyExtractor for HeuristicExtractor {
    fn extract(&self, content: &str) -> BTreeSet<String> {
        let mut modules = BTreeSet::new();

        // Same line endings as `count_lines`: `\n`, `\r\n` and bare `\r`
        for line in content.split(['\n', '\r']) {
            let line = line.trim();

            if let Some(module) = python_module(line) {
                modules.insert(module.to_string());
            }
            if let Some(module) = quoted_module(line) {
                modules.insert(module.to_string());
            }
        }

        modules
    }
}

/// `import a.b` / `from a.b import c` -> `a`; relative `from .c import d` -> ``
fn python_module(line: &str) -> Option<&str> {
    if !(line.starts_with("import ") || line.starts_with("from ")) {
        return None;
    }
    let token = line.split_whitespace().nth(1)?;
    Some(token.split('.').next().unwrap_or(token))
}

/// `import x from "mod"` / `import x = require('mod')` -> `mod`
///
/// Uses whichever quote character appears first; an unterminated quote runs
/// to the end of the line.
fn quoted_module(line: &str) -> Option<&str> {
    if !line.contains("import") || !(line.contains("from") || line.contains("require")) {
        return None;
    }
    let start = line.find(['"', '\''])?;
    let quote = line[start..].chars().next()?;
    let rest = &line[start + quote.len_utf8()..];
    Some(rest.split(quote).next().unwrap_or(rest))
}
