//! # Context Indexer
//!
//! Discovers the candidate files of a project and reads them for the later
//! ranking stages.
//!
//! ## Pipeline
//!
//! ```text
//! Project root
//!     │
//!     └──> File Scanner (extension allow-list, pruned directories)
//!            └─> Candidate files ──> read_source / count_lines
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use context_indexer::FileScanner;
//!
//! let files = FileScanner::new("/path/to/project").scan();
//! println!("Found {} candidate files", files.len());
//! ```

mod error;
mod scanner;
mod source;

pub use error::{IndexerError, Result};
pub use scanner::{FileScanner, IGNORED_DIRS, SUPPORTED_EXTENSIONS};
pub use source::{count_lines, read_source};
