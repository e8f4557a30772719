//! Scoring profiles: category weights, penalties and thresholds.
//!
//! Two fixed profiles exist. `strict` (the default) weights categories
//! 20/20/30/15/15, checks six sections plus a summary and raises the length
//! and impact bars. `lenient` weights 25/25/25/15/10, checks five sections and
//! LinkedIn instead of the summary. A scorer uses exactly one profile; the
//! two are never mixed within a run.
//!
//! Under `strict` a missing summary costs twice on purpose: once as content
//! (`missing-summary`, −5) and once as a missing standard section
//! (`missing-section-summary`, −4), nine points in total. Both issues point at
//! the same quick fix.

use crate::error::{AtsError, Result};
use crate::models::{Category, SectionName};
use serde::Serialize;
use std::str::FromStr;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    #[default]
    Strict,
    Lenient,
}

impl ProfileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Strict => "strict",
            ProfileKind::Lenient => "lenient",
        }
    }
}

impl FromStr for ProfileKind {
    type Err = AtsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ProfileKind::Strict),
            "lenient" | "loose" => Ok(ProfileKind::Lenient),
            other => Err(AtsError::UnknownProfile(other.to_string())),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Maximum points per category. Sums to 100 for both profiles.
pub struct CategoryMax {
    pub format: u32,
    pub content: u32,
    pub ats_compatibility: u32,
    pub keywords: u32,
    pub impact: u32,
}

impl CategoryMax {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Format => self.format,
            Category::Content => self.content,
            Category::Ats => self.ats_compatibility,
            Category::Keywords => self.keywords,
            Category::Impact => self.impact,
        }
    }

    pub fn total(&self) -> u32 {
        self.format + self.content + self.ats_compatibility + self.keywords + self.impact
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringProfile {
    pub kind: ProfileKind,
    pub max: CategoryMax,
    pub email_penalty: u32,
    pub phone_penalty: u32,
    /// `None` skips the check entirely.
    pub summary_penalty: Option<u32>,
    pub linkedin_penalty: Option<u32>,
    pub sections: Vec<SectionName>,
    pub section_penalty: u32,
    pub visual_element_penalty: u32,
    pub impact_threshold: usize,
    pub low_impact_penalty: u32,
    pub words_per_page: usize,
    pub very_short_words: usize,
    pub very_short_penalty: u32,
    pub min_words: usize,
    pub short_penalty: u32,
    pub max_pages: usize,
    pub too_long_penalty: u32,
    pub buzzword_penalty: u32,
    pub skills_window_chars: usize,
    pub weak_skills_min_chars: usize,
    pub weak_skills_penalty: u32,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        ScoringProfile::strict()
    }
}

impl ScoringProfile {
    pub fn for_kind(kind: ProfileKind) -> ScoringProfile {
        match kind {
            ProfileKind::Strict => ScoringProfile::strict(),
            ProfileKind::Lenient => ScoringProfile::lenient(),
        }
    }

    pub fn strict() -> ScoringProfile {
        ScoringProfile {
            kind: ProfileKind::Strict,
            max: CategoryMax {
                format: 20,
                content: 20,
                ats_compatibility: 30,
                keywords: 15,
                impact: 15,
            },
            email_penalty: 10,
            phone_penalty: 5,
            summary_penalty: Some(5),
            linkedin_penalty: None,
            sections: SectionName::ALL.to_vec(),
            section_penalty: 4,
            visual_element_penalty: 10,
            impact_threshold: 5,
            low_impact_penalty: 7,
            words_per_page: 500,
            very_short_words: 150,
            very_short_penalty: 12,
            min_words: 250,
            short_penalty: 6,
            max_pages: 2,
            too_long_penalty: 5,
            buzzword_penalty: 3,
            skills_window_chars: 300,
            weak_skills_min_chars: 40,
            weak_skills_penalty: 8,
        }
    }

    pub fn lenient() -> ScoringProfile {
        ScoringProfile {
            kind: ProfileKind::Lenient,
            max: CategoryMax {
                format: 25,
                content: 25,
                ats_compatibility: 25,
                keywords: 15,
                impact: 10,
            },
            email_penalty: 10,
            phone_penalty: 5,
            summary_penalty: None,
            linkedin_penalty: Some(2),
            sections: vec![
                SectionName::Experience,
                SectionName::Education,
                SectionName::Skills,
                SectionName::Summary,
                SectionName::Projects,
            ],
            section_penalty: 5,
            visual_element_penalty: 10,
            impact_threshold: 3,
            low_impact_penalty: 5,
            words_per_page: 500,
            very_short_words: 150,
            very_short_penalty: 10,
            min_words: 150,
            short_penalty: 0,
            max_pages: 2,
            too_long_penalty: 5,
            buzzword_penalty: 3,
            skills_window_chars: 300,
            weak_skills_min_chars: 40,
            weak_skills_penalty: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_sum_to_one_hundred() {
        assert_eq!(ScoringProfile::strict().max.total(), 100);
        assert_eq!(ScoringProfile::lenient().max.total(), 100);
    }

    #[test]
    fn test_zero_is_worse_than_partial() {
        for p in [ScoringProfile::strict(), ScoringProfile::lenient()] {
            assert!(p.low_impact_penalty < p.max.impact);
            assert!(p.weak_skills_penalty < p.max.keywords);
            assert!(p.short_penalty < p.very_short_penalty);
        }
    }

    #[test]
    fn test_parse_profile_kind() {
        assert_eq!("Strict".parse::<ProfileKind>().unwrap(), ProfileKind::Strict);
        assert_eq!("lenient".parse::<ProfileKind>().unwrap(), ProfileKind::Lenient);
        assert!(matches!(
            "harsh".parse::<ProfileKind>(),
            Err(AtsError::UnknownProfile(s)) if s == "harsh"
        ));
    }

    #[test]
    fn test_strict_checks_summary_but_not_linkedin() {
        let p = ScoringProfile::default();
        assert_eq!(p.kind, ProfileKind::Strict);
        assert!(p.summary_penalty.is_some());
        assert!(p.linkedin_penalty.is_none());
        assert_eq!(p.sections.len(), 6);
    }
}
