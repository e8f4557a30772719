//! Batch runner: score every résumé matched by a set of glob patterns.
//!
//! Produces a `ScoreReport` with one entry per file and a summary. Files are
//! scored in parallel; results are sorted by path so output is deterministic.

use crate::models::report::{FileScore, ScoreReport};
use crate::scoring::Scorer;
use glob::glob;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name shown for text read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// Path relative to `root` when possible, for display.
pub fn display_path(path: &Path, root: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

/// Expand glob patterns (relative to `root`) into a sorted, de-duplicated file list.
///
/// Patterns that fail to parse or match nothing are reported as errors.
pub fn collect_targets(root: &Path, patterns: &[String]) -> (Vec<PathBuf>, Vec<String>) {
    let mut targets: BTreeSet<PathBuf> = BTreeSet::new();
    let mut errors: Vec<String> = Vec::new();
    for pat in patterns {
        let abs_glob = root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        let entries = match glob(&pattern) {
            Ok(entries) => entries,
            Err(e) => {
                errors.push(format!("bad glob pattern '{}': {}", pat, e.msg));
                continue;
            }
        };
        let mut matched = 0usize;
        for entry in entries {
            match entry {
                Ok(p) if p.is_file() => {
                    matched += 1;
                    targets.insert(p);
                }
                Ok(_) => {}
                Err(e) => errors.push(format!("cannot read {}: {}", e.path().display(), e.error())),
            }
        }
        debug!(pattern = %pat, matched, "pattern expanded");
        if matched == 0 {
            errors.push(format!("no files matched '{}'", pat));
        }
    }
    (targets.into_iter().collect(), errors)
}

/// Score a single in-memory text under a display name.
pub fn score_text(name: &str, text: &str, scorer: &Scorer) -> FileScore {
    FileScore {
        file: name.to_string(),
        result: scorer.score(text),
    }
}

/// Score files matched by `patterns` and build the report.
///
/// Returns the report plus human-readable errors for unreadable files and
/// patterns that matched nothing; these never abort the run.
pub fn run_score(
    root: &Path,
    patterns: &[String],
    scorer: &Scorer,
    min_score: u32,
) -> (ScoreReport, Vec<String>) {
    let (targets, mut errors) = collect_targets(root, patterns);

    let per_file: Vec<Result<FileScore, String>> = targets
        .par_iter()
        .map(|path| {
            let file = display_path(path, root);
            match fs::read_to_string(path) {
                Ok(text) => Ok(score_text(&file, &text, scorer)),
                Err(e) => Err(format!("cannot read {}: {}", file, e)),
            }
        })
        .collect();

    let mut results: Vec<FileScore> = Vec::with_capacity(per_file.len());
    for r in per_file {
        match r {
            Ok(file_score) => results.push(file_score),
            Err(e) => errors.push(e),
        }
    }
    results.sort_by(|a, b| a.file.cmp(&b.file));
    let report = ScoreReport::from_results(results, min_score);
    info!(
        files = report.summary.files,
        average = report.summary.average_score,
        below_threshold = report.summary.below_threshold,
        "scoring finished"
    );
    (report, errors)
}
