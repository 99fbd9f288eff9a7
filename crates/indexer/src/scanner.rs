use crate::error::{IndexerError, Result};
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

/// Scanner for finding candidate files in a project
pub struct FileScanner {
    root: PathBuf,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the project tree for candidate files.
    ///
    /// Never fails: a root that cannot be enumerated yields an empty list and
    /// unreadable entries below it are skipped. Order is traversal order.
    pub fn scan(&self) -> Vec<PathBuf> {
        match self.try_scan() {
            Ok(files) => {
                log::debug!("Found {} candidate files", files.len());
                files
            }
            Err(e) => {
                log::warn!("Error scanning files: {e}");
                Vec::new()
            }
        }
    }

    /// Like [`scan`](Self::scan) but reports a root that is not a directory.
    pub fn try_scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(IndexerError::InvalidPath(self.root.display().to_string()));
        }

        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder.standard_filters(false).follow_links(false);
        // Pruning here keeps the walker from ever descending into ignored trees.
        builder.filter_entry(|entry| !Self::is_ignored_dir(entry));

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let path = entry.path();
                    let is_file = match entry.file_type() {
                        Some(file_type) if file_type.is_file() => true,
                        Some(file_type) if file_type.is_symlink() => path.is_file(),
                        _ => false,
                    };
                    if is_file && Self::is_supported_file(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => log::debug!("Skipping unreadable entry: {e}"),
            }
        }

        Ok(files)
    }

    fn is_ignored_dir(entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        is_dir
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| IGNORED_DIRS.contains(&name))
    }

    /// Extension check is case-insensitive; files without one never match.
    fn is_supported_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|candidate| ext.eq_ignore_ascii_case(candidate))
            })
            .unwrap_or(false)
    }
}

/// Directory names pruned from the walk (exact, case-sensitive match).
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".git",
    "venv",
    "env",
    "dist",
    "build",
    ".next",
    "out",
    "target",
    "bin",
    "obj",
];

/// Source, markup and config extensions considered for context.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    // Languages
    "py", "js", "ts", "jsx", "tsx", "java", "go", "rs", "c", "cpp", "h", "hpp", "cs", "rb", "php",
    "swift", "kt", "scala",
    // Docs / config
    "md", "yaml", "yml", "json", "toml",
];

#[cfg(test)]
mod tests {
    use super::FileScanner;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::tempdir;

    fn names(files: &[std::path::PathBuf]) -> BTreeSet<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn keeps_only_supported_extensions() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("main.py"), b"print(1)\n").unwrap();
        fs::write(temp.path().join("README.MD"), b"# hi\n").unwrap();
        fs::write(temp.path().join("logo.png"), b"\x89PNG").unwrap();
        fs::write(temp.path().join("Makefile"), b"all:\n").unwrap();

        let files = FileScanner::new(temp.path()).scan();

        assert_eq!(
            names(&files),
            BTreeSet::from(["README.MD".to_string(), "main.py".to_string()])
        );
    }

    #[test]
    fn prunes_ignored_directories() {
        let temp = tempdir().unwrap();
        for dir in ["node_modules/pkg", "build", "src/__pycache__", ".git", "src"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        fs::write(temp.path().join("node_modules/pkg/index.js"), b"x").unwrap();
        fs::write(temp.path().join("build/out.js"), b"x").unwrap();
        fs::write(temp.path().join("src/__pycache__/m.py"), b"x").unwrap();
        fs::write(temp.path().join(".git/config.toml"), b"x").unwrap();
        fs::write(temp.path().join("src/app.ts"), b"x").unwrap();

        let files = FileScanner::new(temp.path()).scan();

        assert_eq!(names(&files), BTreeSet::from(["app.ts".to_string()]));
    }

    #[test]
    fn directory_match_is_exact() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("builder")).unwrap();
        fs::create_dir_all(temp.path().join("Build")).unwrap();
        fs::write(temp.path().join("builder/a.rs"), b"x").unwrap();
        fs::write(temp.path().join("Build/b.rs"), b"x").unwrap();

        let files = FileScanner::new(temp.path()).scan();

        assert_eq!(
            names(&files),
            BTreeSet::from(["a.rs".to_string(), "b.rs".to_string()])
        );
    }

    #[test]
    fn root_named_like_ignored_dir_is_still_walked() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("build");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("lib.rs"), b"x").unwrap();

        let files = FileScanner::new(&root).scan();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn missing_root_yields_empty_list() {
        let temp = tempdir().unwrap();
        let scanner = FileScanner::new(temp.path().join("does-not-exist"));

        assert!(scanner.scan().is_empty());
        assert!(scanner.try_scan().is_err());
    }
}
