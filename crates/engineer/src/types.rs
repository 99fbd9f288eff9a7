use context_graph::DependencyGraph;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A file accepted into the context
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    pub path: String,
    /// Importance score rounded to two decimals
    pub score: f64,
    pub lines: usize,
    pub estimated_tokens: usize,
}

/// Aggregate view of the selected files
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContextMetadata {
    pub total_lines: usize,
    pub total_tokens: usize,
    /// Extension (with leading dot, `""` when absent) -> file count
    pub file_types: BTreeMap<String, usize>,
    /// Parent directories relative to the project root; the root itself is omitted
    pub directories_covered: BTreeSet<String>,
    pub avg_score: f64,
}

/// Result of [`ContextEngineer::build_analysis_context`](crate::ContextEngineer::build_analysis_context)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisContext {
    /// Selected files in rank order
    pub files: Vec<FileRecord>,
    pub dependency_graph: DependencyGraph,
    pub metadata: ContextMetadata,
    pub total_files: usize,
    pub selected_count: usize,
    pub coverage_percent: f64,
}

impl AnalysisContext {
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// `selected / total * 100`, or 0 for an empty project
pub(crate) fn coverage_percent(selected: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        selected as f64 / total as f64 * 100.0
    }
}
