//! Shared data models for scoring results and batch reports.

pub mod report;

use serde::Serialize;
use std::fmt;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Score category an issue is attributed to.
pub enum Category {
    Format,
    Content,
    Ats,
    Keywords,
    Impact,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
/// How strongly a finding should be surfaced.
pub enum Severity {
    Critical,
    Important,
    Minor,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Important => "important",
            Severity::Minor => "minor",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Recognized résumé sections, in the order they are checked.
pub enum SectionName {
    Experience,
    Education,
    Skills,
    Summary,
    Projects,
    Certifications,
}

impl SectionName {
    pub const ALL: [SectionName; 6] = [
        SectionName::Experience,
        SectionName::Education,
        SectionName::Skills,
        SectionName::Summary,
        SectionName::Projects,
        SectionName::Certifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Experience => "experience",
            SectionName::Education => "education",
            SectionName::Skills => "skills",
            SectionName::Summary => "summary",
            SectionName::Projects => "projects",
            SectionName::Certifications => "certifications",
        }
    }

    /// Capitalized label used in messages and inserted headers.
    pub fn title(&self) -> &'static str {
        match self {
            SectionName::Experience => "Experience",
            SectionName::Education => "Education",
            SectionName::Skills => "Skills",
            SectionName::Summary => "Summary",
            SectionName::Projects => "Projects",
            SectionName::Certifications => "Certifications",
        }
    }

    pub fn parse(s: &str) -> Option<SectionName> {
        SectionName::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Missing experience, education or skills blocks ATS parsing outright.
    pub fn is_core(&self) -> bool {
        matches!(
            self,
            SectionName::Experience | SectionName::Education | SectionName::Skills
        )
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single finding: why points were deducted and how to fix it.
pub struct Issue {
    pub id: String,
    pub category: Category,
    pub severity: Severity,
    pub message: String,
    pub remediation: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
/// Points per category; each value lies within the profile's maximum.
pub struct ScoreBreakdown {
    pub format: u32,
    pub content: u32,
    pub ats_compatibility: u32,
    pub keywords: u32,
    pub impact: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.format + self.content + self.ats_compatibility + self.keywords + self.impact
    }

    /// Category values in display order.
    pub fn entries(&self) -> [(Category, u32); 5] {
        [
            (Category::Format, self.format),
            (Category::Content, self.content),
            (Category::Ats, self.ats_compatibility),
            (Category::Keywords, self.keywords),
            (Category::Impact, self.impact),
        ]
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Format => self.format,
            Category::Content => self.content,
            Category::Ats => self.ats_compatibility,
            Category::Keywords => self.keywords,
            Category::Impact => self.impact,
        }
    }
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Format => "Format",
            Category::Content => "Content",
            Category::Ats => "ATS",
            Category::Keywords => "Keywords",
            Category::Impact => "Impact",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Derived metrics attached to a score.
pub struct AnalysisDetails {
    pub word_count: usize,
    pub page_count_estimate: usize,
    pub email_detected: bool,
    pub phone_detected: bool,
    #[serde(rename = "linkedInDetected")]
    pub linkedin_detected: bool,
    pub sections_found: Vec<SectionName>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Total, breakdown and details for one scored text.
pub struct AtsScoreResult {
    pub total: u32,
    pub breakdown: ScoreBreakdown,
    pub details: AnalysisDetails,
}

impl AtsScoreResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_total(self.total)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Engine output: the score plus the issues that explain every deduction.
pub struct AnalysisResult {
    pub score: AtsScoreResult,
    pub issues: Vec<Issue>,
}

impl AnalysisResult {
    pub fn has_issue(&self, id: &str) -> bool {
        self.issues.iter().any(|is| is.id == id)
    }

    pub fn count_severity(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|is| is.severity == severity).count()
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
/// Coarse grade shown next to the total.
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn for_total(total: u32) -> ScoreBand {
        if total >= 80 {
            ScoreBand::Excellent
        } else if total >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsWork
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! Your resume is ready for applications.",
            ScoreBand::Good => "Good start, but needs optimization.",
            ScoreBand::NeedsWork => "Significant improvements needed to pass ATS.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_total_sums_categories() {
        let b = ScoreBreakdown {
            format: 20,
            content: 15,
            ats_compatibility: 26,
            keywords: 7,
            impact: 8,
        };
        assert_eq!(b.total(), 76);
        assert_eq!(b.get(Category::Ats), 26);
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::for_total(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_total(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_total(79), ScoreBand::Good);
        assert_eq!(ScoreBand::for_total(60), ScoreBand::Good);
        assert_eq!(ScoreBand::for_total(59), ScoreBand::NeedsWork);
    }

    #[test]
    fn test_section_name_parse_is_case_insensitive() {
        assert_eq!(SectionName::parse("Skills"), Some(SectionName::Skills));
        assert_eq!(SectionName::parse(" EDUCATION "), Some(SectionName::Education));
        assert_eq!(SectionName::parse("hobbies"), None);
    }

    #[test]
    fn test_issue_serializes_lowercase_enums() {
        let is = Issue {
            id: "missing-email".into(),
            category: Category::Content,
            severity: Severity::Critical,
            message: "m".into(),
            remediation: "r".into(),
        };
        let v = serde_json::to_value(&is).unwrap();
        assert_eq!(v["category"], "content");
        assert_eq!(v["severity"], "critical");
    }

    #[test]
    fn test_details_use_camel_case_keys() {
        let d = AnalysisDetails {
            word_count: 3,
            page_count_estimate: 1,
            email_detected: true,
            phone_detected: false,
            linkedin_detected: false,
            sections_found: vec![SectionName::Skills],
        };
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["wordCount"], 3);
        assert_eq!(v["pageCountEstimate"], 1);
        assert_eq!(v["linkedInDetected"], false);
        assert_eq!(v["sectionsFound"][0], "skills");
    }
}
