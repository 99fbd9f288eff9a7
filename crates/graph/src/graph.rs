use crate::types::DependencyGraph;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// Resolved "who points at whom" view of a [`DependencyGraph`].
///
/// Node `i < file_count` is the i-th distinct input file. An edge
/// `importer -> file` exists when one of the importer's module names equals
/// the file path or is a suffix of it, weighted `1 / max(1, |modules|)`.
/// Importers that are not among the input files get trailing nodes whose score
/// never changes.
pub struct LinkGraph {
    graph: DiGraph<PathBuf, f64>,
    file_count: usize,
}

impl LinkGraph {
    pub fn build(files: &[PathBuf], dependencies: &DependencyGraph) -> Self {
        let mut graph = DiGraph::new();
        let mut index: HashMap<String, NodeIndex> = HashMap::new();

        for path in files {
            let key = path.to_string_lossy().into_owned();
            if !index.contains_key(&key) {
                let idx = graph.add_node(path.clone());
                index.insert(key, idx);
            }
        }
        let file_count = graph.node_count();
        let targets: Vec<(NodeIndex, String)> = graph
            .node_indices()
            .map(|idx| (idx, graph[idx].to_string_lossy().into_owned()))
            .collect();

        for (importer, modules) in dependencies {
            let source = match index.get(importer) {
                Some(&idx) => idx,
                None => {
                    let idx = graph.add_node(PathBuf::from(importer));
                    index.insert(importer.clone(), idx);
                    idx
                }
            };
            let weight = 1.0 / modules.len().max(1) as f64;

            for (target, path) in &targets {
                if Self::references(modules, path) {
                    graph.add_edge(source, *target, weight);
                }
            }
        }

        log::debug!(
            "Built link graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Self { graph, file_count }
    }

    /// Loose match: exact membership or any module name that suffixes the path
    fn references(modules: &BTreeSet<String>, path: &str) -> bool {
        modules.contains(path) || modules.iter().any(|module| path.ends_with(module.as_str()))
    }

    /// Input files in first-seen order
    pub fn files(&self) -> impl Iterator<Item = (NodeIndex, &PathBuf)> {
        (0..self.file_count).map(move |i| {
            let idx = NodeIndex::new(i);
            (idx, &self.graph[idx])
        })
    }

    /// (importer, weight) pairs pointing at `node`
    pub fn incoming(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph
            .edges_directed(node, Direction::Incoming)
            .map(|edge| (edge.source(), *edge.weight()))
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
