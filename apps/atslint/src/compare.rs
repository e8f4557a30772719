//! Score comparison between two versions of a résumé.

use crate::models::{AnalysisResult, Category};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDelta {
    pub category: Category,
    pub before: u32,
    pub after: u32,
    pub delta: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// What changed between two scores. Issue ids keep their original order.
pub struct ScoreDelta {
    pub before: u32,
    pub after: u32,
    pub delta: i64,
    pub categories: Vec<CategoryDelta>,
    pub resolved: Vec<String>,
    pub introduced: Vec<String>,
}

impl ScoreDelta {
    pub fn improved(&self) -> bool {
        self.delta > 0
    }
}

pub fn compare(before: &AnalysisResult, after: &AnalysisResult) -> ScoreDelta {
    let categories = before
        .score
        .breakdown
        .entries()
        .into_iter()
        .map(|(category, b)| {
            let a = after.score.breakdown.get(category);
            CategoryDelta {
                category,
                before: b,
                after: a,
                delta: i64::from(a) - i64::from(b),
            }
        })
        .collect();
    let resolved = before
        .issues
        .iter()
        .filter(|is| !after.has_issue(&is.id))
        .map(|is| is.id.clone())
        .collect();
    let introduced = after
        .issues
        .iter()
        .filter(|is| !before.has_issue(&is.id))
        .map(|is| is.id.clone())
        .collect();
    ScoreDelta {
        before: before.score.total,
        after: after.score.total,
        delta: i64::from(after.score.total) - i64::from(before.score.total),
        categories,
        resolved,
        introduced,
    }
}
