//! Batch report schema: one entry per scored file plus an aggregate summary.

use super::{AnalysisResult, Severity};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
/// Score of a single file.
pub struct FileScore {
    pub file: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Aggregated counts used by printers and exit codes.
pub struct ScoreSummary {
    pub files: usize,
    pub average_score: f64,
    pub critical: usize,
    pub important: usize,
    pub minor: usize,
    pub below_threshold: usize,
}

#[derive(Serialize, Debug, Clone)]
/// Results container for `atslint score`.
pub struct ScoreReport {
    pub results: Vec<FileScore>,
    pub summary: ScoreSummary,
}

impl ScoreReport {
    /// Build the summary from per-file results. `min_score` of zero never flags a file.
    pub fn from_results(results: Vec<FileScore>, min_score: u32) -> ScoreReport {
        let mut summary = ScoreSummary {
            files: results.len(),
            ..ScoreSummary::default()
        };
        let mut sum: u64 = 0;
        for r in &results {
            sum += u64::from(r.result.score.total);
            summary.critical += r.result.count_severity(Severity::Critical);
            summary.important += r.result.count_severity(Severity::Important);
            summary.minor += r.result.count_severity(Severity::Minor);
            if r.result.score.total < min_score {
                summary.below_threshold += 1;
            }
        }
        if !results.is_empty() {
            let avg = sum as f64 / results.len() as f64;
            summary.average_score = (avg * 10.0).round() / 10.0;
        }
        ScoreReport { results, summary }
    }
}
