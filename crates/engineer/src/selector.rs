use crate::types::FileRecord;
use context_graph::ScoredFile;
use context_indexer::{count_lines, read_source};

/// Greedy prefix selection of ranked files under a token budget
pub struct BudgetSelector {
    max_tokens: usize,
    tokens_per_line: usize,
}

impl BudgetSelector {
    pub fn new(max_tokens: usize, tokens_per_line: usize) -> Self {
        Self {
            max_tokens,
            tokens_per_line,
        }
    }

    /// Walk `ranked` in order, accepting files while the running estimate
    /// stays within budget. The first file that would overflow ends the walk;
    /// later (smaller) files are never considered. Unreadable files are
    /// skipped without cost.
    pub fn select(&self, ranked: &[ScoredFile]) -> Vec<FileRecord> {
        let mut selected = Vec::new();
        let mut used_tokens: usize = 0;

        for file in ranked {
            let lines = match read_source(&file.path) {
                Ok(content) => count_lines(&content),
                Err(e) => {
                    log::debug!("Could not process {}: {e}", file.path.display());
                    continue;
                }
            };
            let estimated_tokens = lines.saturating_mul(self.tokens_per_line);

            if used_tokens.saturating_add(estimated_tokens) > self.max_tokens {
                log::debug!(
                    "Budget exhausted at {} ({} + {} > {})",
                    file.path.display(),
                    used_tokens,
                    estimated_tokens,
                    self.max_tokens
                );
                break;
            }

            used_tokens += estimated_tokens;
            selected.push(FileRecord {
                path: file.path.to_string_lossy().into_owned(),
                score: round2(file.score),
                lines,
                estimated_tokens,
            });
        }

        selected
    }
}

/// Two-decimal rounding on the exact binary value, ties to even
/// (`0.125` -> `0.12`, `2.675` -> `2.67`)
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn write_lines(dir: &Path, name: &str, lines: usize) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "x = 1\n".repeat(lines)).unwrap();
        path
    }

    fn ranked(paths: &[PathBuf]) -> Vec<ScoredFile> {
        paths
            .iter()
            .enumerate()
            .map(|(i, path)| ScoredFile {
                path: path.clone(),
                score: 10.0 - i as f64,
            })
            .collect()
    }

    #[test]
    fn stops_at_first_file_over_budget() {
        let temp = tempdir().unwrap();
        let files = vec![
            write_lines(temp.path(), "a.py", 10),
            write_lines(temp.path(), "b.py", 30),
            write_lines(temp.path(), "c.py", 1),
        ];

        // 40 + 120 > 100, so c.py (4 tokens) is never reached
        let selected = BudgetSelector::new(100, 4).select(&ranked(&files));

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].lines, 10);
        assert_eq!(selected[0].estimated_tokens, 40);
    }

    #[test]
    fn exact_fit_is_accepted() {
        let temp = tempdir().unwrap();
        let files = vec![
            write_lines(temp.path(), "a.py", 10),
            write_lines(temp.path(), "b.py", 15),
        ];

        let selected = BudgetSelector::new(100, 4).select(&ranked(&files));

        assert_eq!(selected.len(), 2);
        assert_eq!(selected.iter().map(|f| f.estimated_tokens).sum::<usize>(), 100);
    }

    #[test]
    fn oversized_first_file_selects_nothing() {
        let temp = tempdir().unwrap();
        let files = vec![
            write_lines(temp.path(), "big.py", 50),
            write_lines(temp.path(), "small.py", 1),
        ];

        let selected = BudgetSelector::new(150, 4).select(&ranked(&files));

        assert!(selected.is_empty());
    }

    #[test]
    fn unreadable_file_is_skipped_not_counted() {
        let temp = tempdir().unwrap();
        let files = vec![
            temp.path().join("vanished.py"),
            write_lines(temp.path(), "kept.py", 2),
        ];

        let selected = BudgetSelector::new(100, 4).select(&ranked(&files));

        assert_eq!(selected.len(), 1);
        assert!(selected[0].path.ends_with("kept.py"));
    }

    #[test]
    fn empty_files_cost_nothing() {
        let temp = tempdir().unwrap();
        let files = vec![write_lines(temp.path(), "__init__.py", 0)];

        let selected = BudgetSelector::new(0, 4).select(&ranked(&files));

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].estimated_tokens, 0);
    }

    #[test]
    fn scores_are_rounded_to_two_decimals() {
        assert_eq!(round2(0.3187), 0.32);
        assert_eq!(round2(0.07500000000000001), 0.08);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        // 2.675 is stored just below the half
        assert_eq!(round2(2.675), 2.67);
    }
}
