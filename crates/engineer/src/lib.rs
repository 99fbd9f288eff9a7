//! # Context Engineer
//!
//! Picks the files of a project that are worth an LLM's context window.
//!
//! ## Pipeline
//!
//! ```text
//! Project root
//!     │
//!     ├──> File Scanner              -> candidate files
//!     ├──> Dependency Extractor      -> file -> {module names}
//!     ├──> Importance Scorer         -> files ranked by damped link score
//!     ├──> Budget Selector           -> greedy prefix within max_tokens
//!     └──> Metadata Extractor        -> totals, file types, directories
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use context_engineer::ContextEngineer;
//!
//! let engineer = ContextEngineer::new(8_000);
//! let context = engineer.build_analysis_context("/path/to/project", &["auth".to_string()]);
//!
//! println!(
//!     "Selected {} of {} files ({:.1}%), {} tokens",
//!     context.selected_count,
//!     context.total_files,
//!     context.coverage_percent,
//!     context.metadata.total_tokens
//! );
//! ```

mod config;
mod engine;
mod error;
mod metadata;
mod selector;
mod types;

pub use config::{EngineConfig, DEFAULT_MAX_TOKENS};
pub use engine::{ContextEngineer, AVG_TOKENS_PER_LINE};
pub use error::{EngineError, Result};
pub use metadata::summarize;
pub use selector::BudgetSelector;
pub use types::{AnalysisContext, ContextMetadata, FileRecord};

pub use context_graph::{DependencyExtractor, DependencyGraph, HeuristicExtractor, ScoredFile};
