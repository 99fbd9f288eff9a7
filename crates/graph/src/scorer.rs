use crate::graph::LinkGraph;
use crate::types::{DependencyGraph, ScoredFile};
use std::path::{Path, PathBuf};

/// Fixed number of propagation rounds; bounds cost rather than promising convergence
pub const ITERATIONS: usize = 10;
pub const DAMPING: f64 = 0.85;

pub const FOCUS_BONUS: f64 = 1.5;
pub const ENTRY_POINT_BONUS: f64 = 2.0;
pub const TEST_FILE_PENALTY: f64 = 0.5;

/// Conventional program entry points (compared against the lowercased file name)
pub const ENTRY_POINT_FILES: &[&str] = &["main.py", "app.py", "index.js", "main.ts", "server.py"];

/// Rank files by importance, highest first.
///
/// Scores start at 1.0 and go through [`ITERATIONS`] synchronous damped
/// rounds over incoming links, then the multipliers are applied once: focus
/// keyword match, then entry point or test file. Equal scores keep input order.
pub fn score_files(
    files: &[PathBuf],
    dependencies: &DependencyGraph,
    focus_areas: &[String],
) -> Vec<ScoredFile> {
    let links = LinkGraph::build(files, dependencies);
    let scores = propagate(&links);

    let keywords: Vec<String> = focus_areas.iter().map(|area| area.to_lowercase()).collect();

    let mut ranked: Vec<ScoredFile> = links
        .files()
        .map(|(idx, path)| ScoredFile {
            path: path.clone(),
            score: scores[idx.index()] * multiplier(path, &keywords),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

fn propagate(links: &LinkGraph) -> Vec<f64> {
    let mut scores = vec![1.0; links.node_count()];
    for _ in 0..ITERATIONS {
        scores = step(links, &scores);
    }
    scores
}

/// One Jacobi round: every update reads `scores` from the previous round.
/// Non-file nodes keep their value.
fn step(links: &LinkGraph, scores: &[f64]) -> Vec<f64> {
    let mut next = scores.to_vec();
    for (idx, _) in links.files() {
        let inbound: f64 = links
            .incoming(idx)
            .map(|(source, weight)| scores[source.index()] * weight)
            .sum();
        next[idx.index()] = (1.0 - DAMPING) + DAMPING * inbound;
    }
    next
}

fn multiplier(path: &Path, keywords: &[String]) -> f64 {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let mut factor = 1.0;
    if keywords.iter().any(|keyword| name.contains(keyword.as_str())) {
        factor *= FOCUS_BONUS;
    }
    if ENTRY_POINT_FILES.contains(&name.as_str()) {
        factor *= ENTRY_POINT_BONUS;
    } else if name.starts_with("test_") {
        factor *= TEST_FILE_PENALTY;
    }
    factor
}
