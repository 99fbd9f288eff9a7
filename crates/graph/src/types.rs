use serde::Serialize;
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// File path -> module names referenced by its import statements.
///
/// Module names are raw identifiers as written in the source; they are not
/// resolved to files. A file with no imports maps to an empty set, a file that
/// could not be read has no entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, modules: BTreeSet<String>) {
        self.edges.insert(path.into(), modules);
    }

    /// Module names referenced by `path`, if it was analysed
    pub fn get(&self, path: &str) -> Option<&BTreeSet<String>> {
        self.edges.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.edges.contains_key(path)
    }

    /// Number of analysed files
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, BTreeSet<String>> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a DependencyGraph {
    type Item = (&'a String, &'a BTreeSet<String>);
    type IntoIter = btree_map::Iter<'a, String, BTreeSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, BTreeSet<String>)> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = (String, BTreeSet<String>)>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

/// A file with its final importance score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredFile {
    pub path: PathBuf,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_as_path_to_module_list() {
        let graph: DependencyGraph = [
            (
                "/p/main.py".to_string(),
                BTreeSet::from(["os".to_string(), "json".to_string()]),
            ),
            ("/p/utils.py".to_string(), BTreeSet::new()),
        ]
        .into_iter()
        .collect();

        let value = serde_json::to_value(&graph).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "/p/main.py": ["json", "os"],
                "/p/utils.py": [],
            })
        );
    }
}
