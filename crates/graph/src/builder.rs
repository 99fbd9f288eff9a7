use crate::extractor::{DependencyExtractor, HeuristicExtractor};
use crate::types::DependencyGraph;
use std::path::PathBuf;

/// Build the import-level dependency graph for a set of files
pub struct GraphBuilder {
    extractor: Box<dyn DependencyExtractor>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::with_extractor(Box::new(HeuristicExtractor))
    }

    pub fn with_extractor(extractor: Box<dyn DependencyExtractor>) -> Self {
        Self { extractor }
    }

    /// Extract dependencies of every file.
    ///
    /// Files that cannot be read are left out of the graph; files without
    /// imports get an empty entry.
    pub fn build(&self, files: &[PathBuf]) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        for path in files {
            match self.extractor.extract_file(path) {
                Ok(modules) => graph.insert(path.to_string_lossy(), modules),
                Err(e) => log::debug!("Could not parse dependencies for {}: {e}", path.display()),
            }
        }

        graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
