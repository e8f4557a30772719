//! Pattern library: every text-recognition rule the scorer relies on.
//!
//! Phrase-based matchers (section synonyms, buzzwords, visual elements,
//! result nouns) are compiled from ordered lists in a `PatternSet`, so adding
//! a synonym or buzzword is a data change only. Each phrase is escaped,
//! word-bounded where it starts/ends with a word character, and inner spaces
//! match any whitespace run.
//!
//! All matching goes through the `regex` crate, which runs in linear time;
//! adversarial input cannot trigger backtracking blowups.

use crate::error::{AtsError, Result};
use crate::models::SectionName;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;

const EMAIL: &str = r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}";
const PHONE: &str = r"(?:\+\d{1,2}\s?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}";
const LINKEDIN: &str = r"(?i)linkedin\.com/in/[a-z0-9_-]+";
const PERCENT: &str = r"\d{1,3}(?:\.\d+)?\s?%";
const DOLLARS: &str = r"\$\s?\d+(?:,\d{3})*(?:\.\d+)?(?:[kmb]\b)?";
// Star ratings and dot meters ("●●●○○") render as graphics in most templates.
const RATING_GLYPHS: &str = r"[★☆✩✪]|[●○]{3,}";
const NEVER: &str = r"[^\s\S]";
// Whole email, URL and bare-domain tokens. Phrase heuristics skip these so
// words inside an address ("stars@synergy.io") are not read as prose.
const CONTACT_TOKEN: &str = r"(?i)\S+@\S+|(?:https?://|www\.)\S+|\S+\.[a-z]{2,}/\S*|\b[a-z0-9-]+(?:\.[a-z0-9-]+)*\.(?:com|net|org|io|dev|co|me|app|ai|edu)\b\S*";

static STANDARD: Lazy<PatternLibrary> = Lazy::new(|| {
    PatternLibrary::from_set(&PatternSet::default()).expect("standard patterns compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered phrase lists the library is compiled from.
pub struct PatternSet {
    pub sections: Vec<(SectionName, Vec<String>)>,
    pub result_nouns: Vec<String>,
    pub visual_elements: Vec<String>,
    pub buzzwords: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PatternSet {
    fn default() -> Self {
        // Multi-word synonyms are listed so header spans start at the first word.
        let sections = vec![
            (
                SectionName::Experience,
                owned(&[
                    "experience",
                    "work experience",
                    "professional experience",
                    "employment history",
                    "work history",
                    "career history",
                ]),
            ),
            (
                SectionName::Education,
                owned(&["education", "academic", "academics"]),
            ),
            (
                SectionName::Skills,
                owned(&["skills", "technologies", "competencies", "tech stack"]),
            ),
            (
                SectionName::Summary,
                owned(&["summary", "objective", "profile", "about me"]),
            ),
            (SectionName::Projects, owned(&["projects", "portfolio"])),
            (
                SectionName::Certifications,
                owned(&["certifications", "certification", "certificates", "licenses"]),
            ),
        ];
        PatternSet {
            sections,
            result_nouns: owned(&[
                "users",
                "customers",
                "clients",
                "revenue",
                "sales",
                "increase",
                "reduction",
                "tickets",
                "servers",
                "workstations",
                "endpoints",
                "projects",
                "budget",
                "savings",
            ]),
            visual_elements: owned(&[
                "strength graph",
                "skill bar",
                "skill bars",
                "skills bar",
                "competency scale",
                "proficiency bar",
                "proficiency meter",
                "rating",
                "ratings",
                "stars",
            ]),
            buzzwords: owned(&[
                "hard worker",
                "hardworking",
                "team player",
                "go-getter",
                "synergy",
                "thought leader",
                "self-starter",
                "results-driven",
                "detail-oriented",
                "think outside the box",
            ]),
        }
    }
}

impl PatternSet {
    /// Append extra phrases; duplicates (case-insensitive) are skipped.
    pub fn extend_section(&mut self, name: SectionName, extra: &[String]) {
        if let Some((_, list)) = self.sections.iter_mut().find(|(n, _)| *n == name) {
            push_unique(list, extra);
        } else {
            let mut list = Vec::new();
            push_unique(&mut list, extra);
            self.sections.push((name, list));
        }
    }

    pub fn extend_result_nouns(&mut self, extra: &[String]) {
        push_unique(&mut self.result_nouns, extra);
    }

    pub fn extend_visual_elements(&mut self, extra: &[String]) {
        push_unique(&mut self.visual_elements, extra);
    }

    pub fn extend_buzzwords(&mut self, extra: &[String]) {
        push_unique(&mut self.buzzwords, extra);
    }
}

fn push_unique(list: &mut Vec<String>, extra: &[String]) {
    for e in extra {
        let e = e.trim();
        if e.is_empty() {
            continue;
        }
        if !list.iter().any(|x| x.eq_ignore_ascii_case(e)) {
            list.push(e.to_string());
        }
    }
}

/// Whole-line form of an alternation: optional indent, the phrase, an optional colon.
fn header_line(alternation: &str) -> String {
    format!(r"(?im)^[ \t]*{alternation}[ \t]*:?[ \t]*\r?$")
}

/// Build a case-insensitive alternation from literal phrases.
fn phrase_alternation(phrases: &[String]) -> String {
    let alts: Vec<String> = phrases
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| {
            let body = p
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+");
            let lead = if p.starts_with(|c: char| c.is_alphanumeric()) {
                r"\b"
            } else {
                ""
            };
            let trail = if p.ends_with(|c: char| c.is_alphanumeric()) {
                r"\b"
            } else {
                ""
            };
            format!("{lead}{body}{trail}")
        })
        .collect();
    if alts.is_empty() {
        return NEVER.to_string();
    }
    format!("(?:{})", alts.join("|"))
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| AtsError::Pattern {
        name: name.to_string(),
        source,
    })
}

#[derive(Debug)]
/// Compiled, immutable matchers. Cheap to share across threads.
pub struct PatternLibrary {
    email: Regex,
    phone: Regex,
    linkedin: Regex,
    sections: Vec<(SectionName, Regex)>,
    /// Same synonyms, but only when they stand alone on a line.
    header_lines: Vec<(SectionName, Regex)>,
    contact_token: Regex,
    quantifier: Regex,
    visual: Regex,
    buzzword: Regex,
}

impl PatternLibrary {
    /// The built-in library, compiled once on first use.
    pub fn standard() -> &'static PatternLibrary {
        &STANDARD
    }

    pub fn from_set(set: &PatternSet) -> Result<PatternLibrary> {
        let mut sections = Vec::with_capacity(set.sections.len());
        let mut header_lines = Vec::with_capacity(set.sections.len());
        for (name, phrases) in &set.sections {
            let key = format!("sections.{}", name);
            let alternation = phrase_alternation(phrases);
            sections.push((*name, compile(&key, &format!("(?i){alternation}"))?));
            header_lines.push((*name, compile(&key, &header_line(&alternation))?));
        }
        let nouns = phrase_alternation(&set.result_nouns);
        let quantifier = format!(r"(?i){PERCENT}|{DOLLARS}|\b\d[\d,.]*[km]?\+?\s?{nouns}");
        Ok(PatternLibrary {
            email: compile("email", EMAIL)?,
            phone: compile("phone", PHONE)?,
            linkedin: compile("linkedin", LINKEDIN)?,
            sections,
            header_lines,
            contact_token: compile("contact_token", CONTACT_TOKEN)?,
            quantifier: compile("result_nouns", &quantifier)?,
            visual: compile(
                "visual_elements",
                &format!(
                    "(?i){}|{RATING_GLYPHS}",
                    phrase_alternation(&set.visual_elements)
                ),
            )?,
            buzzword: compile(
                "buzzwords",
                &format!("(?i){}", phrase_alternation(&set.buzzwords)),
            )?,
        })
    }

    pub fn email(&self, text: &str) -> bool {
        self.email.is_match(text)
    }

    pub fn phone(&self, text: &str) -> bool {
        self.phone.is_match(text)
    }

    pub fn linkedin(&self, text: &str) -> bool {
        self.linkedin.is_match(text)
    }

    /// Ordered `(name, matcher)` pairs for section detection.
    pub fn sections(&self) -> &[(SectionName, Regex)] {
        &self.sections
    }

    pub fn section_header(&self, name: SectionName, text: &str) -> bool {
        self.section_header_span(name, text).is_some()
    }

    /// Byte range of the first header match for `name`.
    pub fn section_header_span(&self, name: SectionName, text: &str) -> Option<Range<usize>> {
        self.sections
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, re)| re.find(text))
            .map(|m| m.range())
    }

    /// Start of the earliest header line (other than `except`) in `text`.
    ///
    /// Only lines holding nothing but a synonym count, so "customer
    /// experience" inside a skills list does not end the section.
    pub fn next_header_start(&self, text: &str, except: SectionName) -> Option<usize> {
        self.header_lines
            .iter()
            .filter(|(n, _)| *n != except)
            .filter_map(|(_, re)| re.find(text).map(|m| m.start()))
            .min()
    }

    pub fn quantifier_count(&self, text: &str) -> usize {
        self.quantifier.find_iter(text).count()
    }

    /// `text` with email, URL and domain tokens blanked out.
    fn prose<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.contact_token.replace_all(text, " ")
    }

    pub fn disallowed_visual_element(&self, text: &str) -> bool {
        self.visual.is_match(&self.prose(text))
    }

    pub fn generic_buzzword(&self, text: &str) -> bool {
        self.buzzword.is_match(&self.prose(text))
    }

    /// Distinct buzzwords in order of first appearance, whitespace-normalized and lowercased.
    pub fn buzzwords_found(&self, text: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let prose = self.prose(text);
        for m in self.buzzword.find_iter(&prose) {
            let norm = m
                .as_str()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            if !out.contains(&norm) {
                out.push(norm);
            }
        }
        out
    }
}
