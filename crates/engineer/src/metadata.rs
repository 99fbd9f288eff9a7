use crate::types::{ContextMetadata, FileRecord};
use pathdiff::diff_paths;
use std::path::Path;

/// Summarize the selected files. Pure aggregation apart from one relative
/// path computation per file.
pub fn summarize(selected: &[FileRecord], project_root: &Path) -> ContextMetadata {
    let mut metadata = ContextMetadata::default();

    for file in selected {
        let path = Path::new(&file.path);
        metadata.total_lines += file.lines;
        metadata.total_tokens += file.estimated_tokens;

        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        *metadata.file_types.entry(extension).or_insert(0) += 1;

        let relative = diff_paths(path, project_root).unwrap_or_else(|| path.to_path_buf());
        if let Some(dir) = relative.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            metadata
                .directories_covered
                .insert(dir.to_string_lossy().into_owned());
        }
    }

    if !selected.is_empty() {
        metadata.avg_score =
            selected.iter().map(|file| file.score).sum::<f64>() / selected.len() as f64;
    }

    metadata
}
