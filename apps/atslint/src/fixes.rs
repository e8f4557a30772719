//! Quick fixes keyed by issue id.
//!
//! Issue ids follow a stable naming convention so front ends can offer an
//! inline input for a missing field instead of a full rewrite:
//!
//! | id                        | field                      |
//! |---------------------------|----------------------------|
//! | `missing-email`           | email address              |
//! | `missing-phone`           | phone number               |
//! | `missing-linkedin`        | LinkedIn URL               |
//! | `missing-summary`         | summary section            |
//! | `missing-section-<name>`  | section `<name>`           |
//!
//! New fixable fields are added as rows in `QUICK_FIXES`.

use crate::error::{AtsError, Result};
use crate::models::SectionName;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", content = "section", rename_all = "lowercase")]
/// What a quick fix fills in.
pub enum FixableField {
    Email,
    Phone,
    LinkedIn,
    Section(SectionName),
}

impl FixableField {
    pub fn label(&self) -> String {
        match self {
            FixableField::Email => "email address".to_string(),
            FixableField::Phone => "phone number".to_string(),
            FixableField::LinkedIn => "LinkedIn URL".to_string(),
            FixableField::Section(name) => format!("{} section", name.title()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum FixRule {
    /// The id must equal the key.
    Field(FixableField),
    /// The id is the key followed by a section name.
    SectionSuffix,
}

const QUICK_FIXES: &[(&str, FixRule)] = &[
    ("missing-email", FixRule::Field(FixableField::Email)),
    ("missing-phone", FixRule::Field(FixableField::Phone)),
    ("missing-linkedin", FixRule::Field(FixableField::LinkedIn)),
    (
        "missing-summary",
        FixRule::Field(FixableField::Section(SectionName::Summary)),
    ),
    ("missing-section-", FixRule::SectionSuffix),
];

/// Resolve the fixable field for an issue id, if the id has a quick fix.
pub fn quick_fix_for(issue_id: &str) -> Option<FixableField> {
    QUICK_FIXES.iter().find_map(|(key, rule)| {
        let rest = issue_id.strip_prefix(key)?;
        match rule {
            FixRule::Field(field) if rest.is_empty() => Some(*field),
            FixRule::Field(_) => None,
            FixRule::SectionSuffix => SectionName::parse(rest).map(FixableField::Section),
        }
    })
}

/// Insert `value` for `field` into `text`.
///
/// Contact values go right after the first non-empty line (usually the
/// name). Sections are appended with an uppercase header.
pub fn apply_quick_fix(text: &str, field: FixableField, value: &str) -> String {
    let value = value.trim();
    match field {
        FixableField::Section(name) => {
            let header = name.title().to_uppercase();
            let body = text.trim_end();
            if body.is_empty() {
                format!("{header}\n{value}\n")
            } else {
                format!("{body}\n\n{header}\n{value}\n")
            }
        }
        _ => insert_after_first_line(text, value),
    }
}

fn insert_after_first_line(text: &str, value: &str) -> String {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let end = offset + line.len();
        if !line.trim().is_empty() {
            let mut out = String::with_capacity(text.len() + value.len() + 1);
            out.push_str(&text[..end]);
            if !line.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(value);
            out.push('\n');
            out.push_str(&text[end..]);
            return out;
        }
        offset = end;
    }
    format!("{value}\n{text}")
}

/// Look up and apply the quick fix for `issue_id`.
pub fn fix_issue(text: &str, issue_id: &str, value: &str) -> Result<String> {
    let field = quick_fix_for(issue_id).ok_or_else(|| AtsError::NotFixable(issue_id.to_string()))?;
    Ok(apply_quick_fix(text, field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_resume;

    #[test]
    fn test_quick_fix_lookup_by_convention() {
        assert_eq!(quick_fix_for("missing-email"), Some(FixableField::Email));
        assert_eq!(quick_fix_for("missing-phone"), Some(FixableField::Phone));
        assert_eq!(quick_fix_for("missing-linkedin"), Some(FixableField::LinkedIn));
        assert_eq!(
            quick_fix_for("missing-summary"),
            Some(FixableField::Section(SectionName::Summary))
        );
        assert_eq!(
            quick_fix_for("missing-section-education"),
            Some(FixableField::Section(SectionName::Education))
        );
        assert_eq!(quick_fix_for("missing-section-hobbies"), None);
        assert_eq!(quick_fix_for("missing-emails"), None);
        assert_eq!(quick_fix_for("low-impact"), None);
    }

    #[test]
    fn test_contact_inserted_after_name_line() {
        let text = "\n  \nJane Doe\nSummary\nEngineer";
        let out = apply_quick_fix(text, FixableField::Email, " jane@example.com ");
        assert_eq!(out, "\n  \nJane Doe\njane@example.com\nSummary\nEngineer");
    }

    #[test]
    fn test_contact_into_single_line_or_empty_text() {
        assert_eq!(
            apply_quick_fix("Jane Doe", FixableField::Phone, "555-123-4567"),
            "Jane Doe\n555-123-4567\n"
        );
        assert_eq!(
            apply_quick_fix("", FixableField::Phone, "555-123-4567"),
            "555-123-4567\n"
        );
    }

    #[test]
    fn test_fix_resolves_issue_after_rescoring() {
        let text = "Jane Doe\nSummary\nEngineer";
        assert!(score_resume(text).has_issue("missing-email"));
        let fixed = fix_issue(text, "missing-email", "jane@example.com").unwrap();
        assert!(!score_resume(&fixed).has_issue("missing-email"));

        let fixed = fix_issue(&fixed, "missing-section-education", "BSc Physics").unwrap();
        assert!(fixed.ends_with("\n\nEDUCATION\nBSc Physics\n"));
        assert!(!score_resume(&fixed).has_issue("missing-section-education"));
    }

    #[test]
    fn test_unfixable_issue_errors() {
        let err = fix_issue("x", "too-short", "more").unwrap_err();
        assert!(matches!(err, AtsError::NotFixable(id) if id == "too-short"));
    }

    #[test]
    fn test_fixable_field_serializes_with_kind() {
        let v = serde_json::to_value(FixableField::Section(SectionName::Skills)).unwrap();
        assert_eq!(v["kind"], "section");
        assert_eq!(v["section"], "skills");
        let v = serde_json::to_value(FixableField::LinkedIn).unwrap();
        assert_eq!(v["kind"], "linkedin");
    }
}
