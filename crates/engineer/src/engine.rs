use crate::config::{EngineConfig, DEFAULT_MAX_TOKENS};
use crate::metadata::summarize;
use crate::selector::BudgetSelector;
use crate::types::{coverage_percent, AnalysisContext};
use context_graph::{score_files, DependencyExtractor, GraphBuilder, ScoredFile};
use context_indexer::FileScanner;
use std::fs;
use std::path::{Path, PathBuf};

/// Average tokens per source line used for cost estimates
pub const AVG_TOKENS_PER_LINE: usize = 4;

/// Selects a token-bounded, importance-ranked subset of a project for an LLM
/// context window.
///
/// Each call to [`build_analysis_context`](Self::build_analysis_context) runs
/// scan -> dependency graph -> scoring -> budget selection -> metadata from
/// scratch; nothing is cached between calls.
pub struct ContextEngineer {
    max_tokens: usize,
    avg_tokens_per_line: usize,
    graph_builder: GraphBuilder,
}

impl ContextEngineer {
    pub fn new(max_tokens: usize) -> Self {
        Self {
            max_tokens,
            avg_tokens_per_line: AVG_TOKENS_PER_LINE,
            graph_builder: GraphBuilder::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_tokens)
    }

    /// Replace the import heuristics used for the dependency graph
    pub fn with_extractor(mut self, extractor: Box<dyn DependencyExtractor>) -> Self {
        self.graph_builder = GraphBuilder::with_extractor(extractor);
        self
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    pub fn avg_tokens_per_line(&self) -> usize {
        self.avg_tokens_per_line
    }

    /// Build the context for `project_path`.
    ///
    /// Never fails: a missing root or unreadable files degrade to smaller (or
    /// empty) results.
    pub fn build_analysis_context(
        &self,
        project_path: impl AsRef<Path>,
        focus_areas: &[String],
    ) -> AnalysisContext {
        let root = resolve_root(project_path.as_ref());
        log::info!("Building analysis context for: {}", root.display());

        let all_files = FileScanner::new(&root).scan();
        log::info!("Found {} files", all_files.len());

        let dependency_graph = self.graph_builder.build(&all_files);
        log::info!(
            "Built dependency graph with {} nodes",
            dependency_graph.len()
        );

        let scored = score_files(&all_files, &dependency_graph, focus_areas);
        log::info!("Scored {} files", scored.len());

        let selected =
            BudgetSelector::new(self.max_tokens, self.avg_tokens_per_line).select(&scored);
        log::info!(
            "Selected {} files (budget: {} tokens)",
            selected.len(),
            self.max_tokens
        );

        let metadata = summarize(&selected, &root);

        AnalysisContext {
            total_files: all_files.len(),
            selected_count: selected.len(),
            coverage_percent: coverage_percent(selected.len(), all_files.len()),
            files: selected,
            dependency_graph,
            metadata,
        }
    }

    /// Rank every candidate file without applying the token budget
    pub fn rank_files(
        &self,
        project_path: impl AsRef<Path>,
        focus_areas: &[String],
    ) -> Vec<ScoredFile> {
        let root = resolve_root(project_path.as_ref());
        let all_files = FileScanner::new(&root).scan();
        let dependency_graph = self.graph_builder.build(&all_files);
        score_files(&all_files, &dependency_graph, focus_areas)
    }
}

/// Absolute root when it exists; otherwise the path as given (the scan will
/// come back empty)
fn resolve_root(project_path: &Path) -> PathBuf {
    fs::canonicalize(project_path).unwrap_or_else(|_| project_path.to_path_buf())
}

impl Default for ContextEngineer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKENS)
    }
}
