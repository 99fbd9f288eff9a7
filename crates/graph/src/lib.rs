//! # Context Graph
//!
//! Import-level dependency analysis and file importance ranking.
//!
//! ## Architecture
//!
//! ```text
//! Candidate files
//!     │
//!     ├──> Graph Builder (line heuristics, pluggable extractor)
//!     │      └─ file -> {module names}   (unresolved, may be empty)
//!     │
//!     ├──> Link Graph (petgraph)
//!     │      └─ importer -> file when a module name equals or suffixes the path
//!     │
//!     └──> Importance Scorer
//!            ├─ 10 damped rounds over incoming links
//!            ├─ focus keyword / entry point / test file multipliers
//!            └─ files ranked by score
//! ```

mod builder;
mod error;
mod extractor;
mod graph;
mod scorer;
mod types;

pub use builder::GraphBuilder;
pub use error::{GraphError, Result};
pub use extractor::{DependencyExtractor, HeuristicExtractor};
pub use graph::LinkGraph;
pub use scorer::{
    score_files, DAMPING, ENTRY_POINT_BONUS, ENTRY_POINT_FILES, FOCUS_BONUS, ITERATIONS,
    TEST_FILE_PENALTY,
};
pub use types::{DependencyGraph, ScoredFile};
