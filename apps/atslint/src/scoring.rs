//! Deterministic ATS scoring engine.
//!
//! `Scorer::score` maps résumé text to a category breakdown plus the issues
//! explaining every deduction. Each check deducts and records its issue in a
//! single call on `Tally`, so a deduction can never exist without its issue.
//! Scoring is pure: no I/O, no logging, no shared mutable state. It never
//! fails for any input, including the empty string.

use crate::models::{
    AnalysisDetails, AnalysisResult, AtsScoreResult, Category, Issue, ScoreBreakdown,
    SectionName, Severity,
};
use crate::patterns::PatternLibrary;
use crate::profile::{CategoryMax, ScoringProfile};
use once_cell::sync::Lazy;

static STANDARD_SCORER: Lazy<Scorer<'static>> =
    Lazy::new(|| Scorer::new(PatternLibrary::standard(), ScoringProfile::strict()));

/// Score `text` with the standard patterns and the strict profile.
pub fn score_resume(text: &str) -> AnalysisResult {
    STANDARD_SCORER.score(text)
}

#[derive(Debug, Clone)]
/// A pattern library paired with one scoring profile.
pub struct Scorer<'p> {
    patterns: &'p PatternLibrary,
    profile: ScoringProfile,
}

/// Running per-category points; signed so deductions can overshoot before clamping.
struct Tally {
    max: CategoryMax,
    format: i64,
    content: i64,
    ats: i64,
    keywords: i64,
    impact: i64,
    issues: Vec<Issue>,
}

impl Tally {
    fn new(max: CategoryMax) -> Tally {
        Tally {
            max,
            format: i64::from(max.format),
            content: i64::from(max.content),
            ats: i64::from(max.ats_compatibility),
            keywords: i64::from(max.keywords),
            impact: i64::from(max.impact),
            issues: Vec::new(),
        }
    }

    fn deduct(&mut self, category: Category, points: u32, issue: Issue) {
        let slot = match category {
            Category::Format => &mut self.format,
            Category::Content => &mut self.content,
            Category::Ats => &mut self.ats,
            Category::Keywords => &mut self.keywords,
            Category::Impact => &mut self.impact,
        };
        *slot -= i64::from(points);
        self.issues.push(issue);
    }

    /// Zero out a category entirely.
    fn zero(&mut self, category: Category, issue: Issue) {
        let points = self.max.get(category);
        self.deduct(category, points, issue);
    }

    fn breakdown(&self) -> ScoreBreakdown {
        let clamp = |v: i64, max: u32| v.clamp(0, i64::from(max)) as u32;
        ScoreBreakdown {
            format: clamp(self.format, self.max.format),
            content: clamp(self.content, self.max.content),
            ats_compatibility: clamp(self.ats, self.max.ats_compatibility),
            keywords: clamp(self.keywords, self.max.keywords),
            impact: clamp(self.impact, self.max.impact),
        }
    }
}

fn issue(
    id: impl Into<String>,
    category: Category,
    severity: Severity,
    message: impl Into<String>,
    remediation: impl Into<String>,
) -> Issue {
    Issue {
        id: id.into(),
        category,
        severity,
        message: message.into(),
        remediation: remediation.into(),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Bundle the computed pieces into the single return shape callers see.
pub fn assemble(
    breakdown: ScoreBreakdown,
    details: AnalysisDetails,
    issues: Vec<Issue>,
) -> AnalysisResult {
    AnalysisResult {
        score: AtsScoreResult {
            total: breakdown.total(),
            breakdown,
            details,
        },
        issues,
    }
}

impl Scorer<'static> {
    /// Standard patterns with the given profile.
    pub fn with_profile(profile: ScoringProfile) -> Scorer<'static> {
        Scorer::new(PatternLibrary::standard(), profile)
    }
}

impl<'p> Scorer<'p> {
    pub fn new(patterns: &'p PatternLibrary, profile: ScoringProfile) -> Scorer<'p> {
        Scorer { patterns, profile }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    pub fn patterns(&self) -> &PatternLibrary {
        self.patterns
    }

    pub fn score(&self, text: &str) -> AnalysisResult {
        let p = &self.profile;
        let mut tally = Tally::new(p.max);

        let email = self.patterns.email(text);
        let phone = self.patterns.phone(text);
        let linkedin = self.patterns.linkedin(text);
        self.check_contact(&mut tally, email, phone, linkedin, text);

        let sections_found = self.check_sections(&mut tally, text);

        if self.patterns.disallowed_visual_element(text) {
            tally.deduct(
                Category::Ats,
                p.visual_element_penalty,
                issue(
                    "visual-elements",
                    Category::Ats,
                    Severity::Critical,
                    "Graphical skill indicators detected (skill bars, star ratings, or graphs).",
                    "ATS parsers cannot read skill bars, ratings, or graphs. Replace them with a plain-text list of skills, optionally noting years of use.",
                ),
            );
        }

        self.check_impact(&mut tally, text);

        let word_count = text.split_whitespace().count();
        let pages = word_count.div_ceil(p.words_per_page.max(1));
        self.check_format(&mut tally, word_count, pages, text);

        self.check_keywords(&mut tally, text);

        let breakdown = tally.breakdown();
        let details = AnalysisDetails {
            word_count,
            page_count_estimate: pages,
            email_detected: email,
            phone_detected: phone,
            linkedin_detected: linkedin,
            sections_found,
        };
        assemble(breakdown, details, tally.issues)
    }

    fn check_contact(
        &self,
        tally: &mut Tally,
        email: bool,
        phone: bool,
        linkedin: bool,
        text: &str,
    ) {
        let p = &self.profile;
        if !email {
            tally.deduct(
                Category::Content,
                p.email_penalty,
                issue(
                    "missing-email",
                    Category::Content,
                    Severity::Critical,
                    "No email address detected.",
                    "Add a professional email address to your header.",
                ),
            );
        }
        if !phone {
            tally.deduct(
                Category::Content,
                p.phone_penalty,
                issue(
                    "missing-phone",
                    Category::Content,
                    Severity::Important,
                    "No phone number detected.",
                    "Include a contact number in your header.",
                ),
            );
        }
        if let Some(penalty) = p.summary_penalty {
            if !self.patterns.section_header(SectionName::Summary, text) {
                tally.deduct(
                    Category::Content,
                    penalty,
                    issue(
                        "missing-summary",
                        Category::Content,
                        Severity::Important,
                        "No professional summary detected.",
                        "Open with a short Summary section stating your role, experience level, and strongest skills.",
                    ),
                );
            }
        }
        if let Some(penalty) = p.linkedin_penalty {
            if !linkedin {
                tally.deduct(
                    Category::Content,
                    penalty,
                    issue(
                        "missing-linkedin",
                        Category::Content,
                        Severity::Minor,
                        "LinkedIn profile link missing.",
                        "Adding a LinkedIn URL helps recruiters research you.",
                    ),
                );
            }
        }
    }

    /// One ordered pass: deductions and the found list come from the same match.
    fn check_sections(&self, tally: &mut Tally, text: &str) -> Vec<SectionName> {
        let p = &self.profile;
        let mut found = Vec::new();
        for (name, re) in self.patterns.sections() {
            if !p.sections.contains(name) {
                continue;
            }
            if re.is_match(text) {
                found.push(*name);
                continue;
            }
            let severity = if name.is_core() {
                Severity::Critical
            } else {
                Severity::Important
            };
            tally.deduct(
                Category::Ats,
                p.section_penalty,
                issue(
                    format!("missing-section-{}", name),
                    Category::Ats,
                    severity,
                    format!("Missing standard section: {}", name.title()),
                    format!(
                        "Add a section titled \"{}\" or rename your existing one to this standard ATS-friendly term.",
                        name.title()
                    ),
                ),
            );
        }
        found
    }

    fn check_impact(&self, tally: &mut Tally, text: &str) {
        let p = &self.profile;
        let count = self.patterns.quantifier_count(text);
        if count == 0 {
            tally.zero(
                Category::Impact,
                issue(
                    "no-impact",
                    Category::Impact,
                    Severity::Critical,
                    "No measurable results found.",
                    "Quantify your achievements with numbers (%, $, counts), e.g. \"Increased sales by 20%\".",
                ),
            );
        } else if count < p.impact_threshold {
            tally.deduct(
                Category::Impact,
                p.low_impact_penalty,
                issue(
                    "low-impact",
                    Category::Impact,
                    Severity::Important,
                    format!(
                        "Only {} found.",
                        plural(count, "quantifiable achievement", "quantifiable achievements")
                    ),
                    format!(
                        "Found {} measurable {}; aim for at least {}. Add percentages, dollar amounts, or counts (users, servers, projects) to more bullet points.",
                        count,
                        if count == 1 { "result" } else { "results" },
                        p.impact_threshold
                    ),
                ),
            );
        }
    }

    fn check_format(&self, tally: &mut Tally, word_count: usize, pages: usize, text: &str) {
        let p = &self.profile;
        if word_count < p.very_short_words {
            tally.deduct(
                Category::Format,
                p.very_short_penalty,
                issue(
                    "too-short",
                    Category::Format,
                    Severity::Critical,
                    format!("Resume is too short ({}).", plural(word_count, "word", "words")),
                    format!(
                        "Expand on your experience, skills, and achievements; aim for at least {} words.",
                        p.min_words
                    ),
                ),
            );
        } else if word_count < p.min_words {
            tally.deduct(
                Category::Format,
                p.short_penalty,
                issue(
                    "too-short",
                    Category::Format,
                    Severity::Important,
                    format!("Resume is on the short side ({word_count} words)."),
                    format!(
                        "Add detail to your most recent roles; aim for at least {} words.",
                        p.min_words
                    ),
                ),
            );
        } else if pages > p.max_pages {
            tally.deduct(
                Category::Format,
                p.too_long_penalty,
                issue(
                    "too-long",
                    Category::Format,
                    Severity::Important,
                    format!(
                        "Resume exceeds {} pages (about {pages} pages, {word_count} words).",
                        p.max_pages
                    ),
                    format!(
                        "Condense your resume to 1-{} pages for better readability.",
                        p.max_pages
                    ),
                ),
            );
        }

        let buzzwords = self.patterns.buzzwords_found(text);
        if !buzzwords.is_empty() {
            tally.deduct(
                Category::Format,
                p.buzzword_penalty,
                issue(
                    "generic-buzzwords",
                    Category::Format,
                    Severity::Minor,
                    format!("Generic buzzwords detected: {}.", buzzwords.join(", ")),
                    "Replace self-praise phrases with concrete accomplishments that show the trait.",
                ),
            );
        }
    }

    fn check_keywords(&self, tally: &mut Tally, text: &str) {
        let p = &self.profile;
        let Some(span) = self.patterns.section_header_span(SectionName::Skills, text) else {
            tally.zero(
                Category::Keywords,
                issue(
                    "no-skills-keywords",
                    Category::Keywords,
                    Severity::Critical,
                    "No skills section to match job keywords against.",
                    "Add a Skills section listing the tools, technologies, and methods relevant to your target roles.",
                ),
            );
            return;
        };
        let content = self.skills_window(&text[span.end..]).trim().chars().count();
        if content < p.weak_skills_min_chars {
            tally.deduct(
                Category::Keywords,
                p.weak_skills_penalty,
                issue(
                    "weak-skills-section",
                    Category::Keywords,
                    Severity::Important,
                    format!(
                        "Skills section is too thin ({}).",
                        plural(content, "character of content", "characters of content")
                    ),
                    format!(
                        "Only {content} characters follow the Skills header; list concrete skills (at least {} characters) so ATS keyword matching has something to find.",
                        p.weak_skills_min_chars
                    ),
                ),
            );
        }
    }

    /// Text after the skills header, bounded by the window size and the next section header.
    fn skills_window<'t>(&self, rest: &'t str) -> &'t str {
        let limit = rest
            .char_indices()
            .nth(self.profile.skills_window_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let window = &rest[..limit];
        match self.patterns.next_header_start(window, SectionName::Skills) {
            Some(cut) => &window[..cut],
            None => window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileKind;

    const FILLER: &str = "Partnered with product and design teams to plan quarterly roadmaps and review service reliability goals.";

    fn well_formed_resume() -> String {
        let head = "Jane Doe\n\
jane.doe@example.com | (555) 123-4567 | linkedin.com/in/janedoe\n\n\
Summary\n\
Platform engineer with eight years building reliable infrastructure for growing product teams.\n\n\
Skills\n\
Rust, Go, Python, Kubernetes, Terraform, PostgreSQL, Kafka, AWS, Linux, CI/CD pipelines\n\n\
Work Experience\n\
Senior Platform Engineer, Acme Corp\n\
- Increased sales by 20% by shipping a faster checkout service\n\
- Reduced cloud spend by $120,000 per year through rightsizing\n\
- Supported 3,000 users across four regions\n\
- Migrated 45 servers to container orchestration\n\
- Cut incident volume by 35% with better alerting\n\
- Delivered 12 projects on schedule\n";
        let tail = "\nProjects\n\
Open source contributor to a distributed tracing library.\n\n\
Education\n\
B.S. Computer Science, State University\n\n\
Certifications\n\
AWS Certified Solutions Architect\n";
        let mut filler = String::new();
        while (head.to_string() + &filler + tail).split_whitespace().count() < 600 {
            filler.push_str("- ");
            filler.push_str(FILLER);
            filler.push('\n');
        }
        format!("{head}{filler}{tail}")
    }

    fn words(n: usize) -> String {
        let vocab = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf"];
        (0..n).map(|i| vocab[i % vocab.len()]).collect::<Vec<_>>().join(" ")
    }

    fn ids(res: &AnalysisResult) -> Vec<&str> {
        res.issues.iter().map(|i| i.id.as_str()).collect()
    }

    fn assert_invariants(res: &AnalysisResult, profile: &ScoringProfile) {
        let b = res.score.breakdown;
        for (cat, v) in b.entries() {
            assert!(v <= profile.max.get(cat), "{:?} = {} exceeds max", cat, v);
        }
        assert_eq!(res.score.total, b.total());
        assert!(res.score.total <= 100);
    }

    #[test]
    fn test_empty_string_scores_the_floor() {
        let res = score_resume("");
        let b = res.score.breakdown;
        assert_eq!(b.format, 8);
        assert_eq!(b.content, 0);
        assert_eq!(b.ats_compatibility, 6);
        assert_eq!(b.keywords, 0);
        assert_eq!(b.impact, 0);
        assert_eq!(res.score.total, 14);
        assert_eq!(
            ids(&res),
            vec![
                "missing-email",
                "missing-phone",
                "missing-summary",
                "missing-section-experience",
                "missing-section-education",
                "missing-section-skills",
                "missing-section-summary",
                "missing-section-projects",
                "missing-section-certifications",
                "no-impact",
                "too-short",
                "no-skills-keywords",
            ]
        );
        assert_eq!(res.score.details.word_count, 0);
        assert_eq!(res.score.details.page_count_estimate, 0);
        assert!(res.score.details.sections_found.is_empty());
    }

    #[test]
    fn test_invariants_hold_for_varied_inputs() {
        let profiles = [ScoringProfile::strict(), ScoringProfile::lenient()];
        let inputs = vec![
            String::new(),
            "   \n\t ".to_string(),
            "x".repeat(5000),
            well_formed_resume(),
            words(1200),
            format!("{} Skill Bar ★★★ synergy team player", words(40)),
            "Skills".to_string(),
            "ÜÑÍÇØDÉ Skills ✓ 😀 Education".to_string(),
        ];
        for profile in &profiles {
            let scorer = Scorer::with_profile(profile.clone());
            for text in &inputs {
                let res = scorer.score(text);
                assert_invariants(&res, profile);
            }
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let text = well_formed_resume();
        assert_eq!(score_resume(&text), score_resume(&text));
        assert_eq!(score_resume("short"), score_resume("short"));
    }

    #[test]
    fn test_adding_email_is_monotonic() {
        let base = format!("Summary\n(555) 123-4567\nSkills\nRust, Go\n{}", words(200));
        let before = score_resume(&base);
        let after = score_resume(&format!("jane@example.com\n{base}"));
        assert!(before.has_issue("missing-email"));
        assert!(!after.has_issue("missing-email"));
        assert!(after.score.breakdown.content > before.score.breakdown.content);
        assert!(after.score.total >= before.score.total);

        // Words inside the address are not visual elements or buzzwords.
        let odd = score_resume(&format!("stars@synergy.io\n{base}"));
        assert!(!odd.has_issue("missing-email"));
        assert!(!odd.has_issue("visual-elements"));
        assert!(!odd.has_issue("generic-buzzwords"));
        assert!(odd.score.total >= before.score.total);
    }

    #[test]
    fn test_quantifiers_and_no_impact() {
        let text = "increased sales by 20% and saved $500";
        assert!(PatternLibrary::standard().quantifier_count(text) >= 2);
        let res = score_resume(&words(60));
        assert_eq!(res.score.breakdown.impact, 0);
        assert!(res.has_issue("no-impact"));
    }

    #[test]
    fn test_low_impact_embeds_count() {
        let res = score_resume("Grew revenue 20% and saved $500");
        assert!(!res.has_issue("no-impact"));
        let low = res.issues.iter().find(|i| i.id == "low-impact").unwrap();
        assert_eq!(low.severity, Severity::Important);
        assert!(low.message.contains("2 quantifiable achievements"));
        assert!(low.remediation.contains("Found 2"));
        assert_eq!(res.score.breakdown.impact, 15 - 7);
    }

    #[test]
    fn test_zero_is_strictly_worse_than_partial() {
        let zero = score_resume("nothing measurable here");
        let some = score_resume("improved latency 30%");
        assert!(zero.score.breakdown.impact < some.score.breakdown.impact);
        let z = zero.issues.iter().find(|i| i.category == Category::Impact).unwrap();
        let s = some.issues.iter().find(|i| i.category == Category::Impact).unwrap();
        assert!(z.severity < s.severity);
    }

    #[test]
    fn test_section_detection_uses_synonyms() {
        let res = score_resume("WORK EXPERIENCE\nAcme");
        assert!(res.score.details.sections_found.contains(&SectionName::Experience));
        assert!(!res.has_issue("missing-section-experience"));
        let res = score_resume("Employment History\nAcme");
        assert!(res.score.details.sections_found.contains(&SectionName::Experience));
    }

    #[test]
    fn test_visual_elements_are_critical_even_when_sections_present() {
        let clean = score_resume(&well_formed_resume());
        let text = format!("{}\nSkill Bar: Python ★★★★☆\n", well_formed_resume());
        let res = score_resume(&text);
        let is = res.issues.iter().find(|i| i.id == "visual-elements").unwrap();
        assert_eq!(is.severity, Severity::Critical);
        assert_eq!(is.category, Category::Ats);
        assert_eq!(
            res.score.breakdown.ats_compatibility,
            clean.score.breakdown.ats_compatibility - 10
        );
    }

    #[test]
    fn test_fifty_word_text_scores_near_floor() {
        let res = score_resume(&words(50));
        assert_eq!(res.score.details.word_count, 50);
        assert!(res.score.total <= 20, "total was {}", res.score.total);
        for id in [
            "missing-email",
            "missing-phone",
            "missing-section-experience",
            "missing-section-education",
            "missing-section-skills",
            "no-impact",
            "too-short",
        ] {
            assert!(res.has_issue(id), "missing issue {id}");
        }
    }

    #[test]
    fn test_well_formed_resume_scores_full_marks() {
        let text = well_formed_resume();
        let res = score_resume(&text);
        assert!(res.issues.is_empty(), "unexpected issues: {:?}", ids(&res));
        assert_eq!(res.score.total, 100);
        let d = &res.score.details;
        assert!(d.word_count >= 600);
        assert_eq!(d.page_count_estimate, 2);
        assert!(d.email_detected && d.phone_detected && d.linkedin_detected);
        assert_eq!(d.sections_found, SectionName::ALL.to_vec());
    }

    #[test]
    fn test_every_deduction_has_an_issue() {
        let texts = [String::new(), words(50), words(200), words(1100)];
        for text in &texts {
            let res = score_resume(text);
            for (cat, v) in res.score.breakdown.entries() {
                let max = ScoringProfile::strict().max.get(cat);
                if v < max {
                    assert!(
                        res.issues.iter().any(|i| i.category == cat),
                        "{:?} lost points without an issue",
                        cat
                    );
                }
            }
        }
    }

    #[test]
    fn test_length_thresholds() {
        let very_short = score_resume(&words(100));
        let short = score_resume(&words(200));
        let long = score_resume(&words(1100));
        let vs = very_short.issues.iter().find(|i| i.id == "too-short").unwrap();
        let s = short.issues.iter().find(|i| i.id == "too-short").unwrap();
        assert_eq!(vs.severity, Severity::Critical);
        assert_eq!(s.severity, Severity::Important);
        assert!(very_short.score.breakdown.format < short.score.breakdown.format);
        assert!(long.has_issue("too-long"));
        assert_eq!(long.score.details.page_count_estimate, 3);
        assert!(!score_resume(&words(300)).has_issue("too-short"));
    }

    #[test]
    fn test_buzzwords_are_minor_and_named() {
        let text = format!("{} I am a hard worker and a team player.", words(300));
        let res = score_resume(&text);
        let is = res.issues.iter().find(|i| i.id == "generic-buzzwords").unwrap();
        assert_eq!(is.severity, Severity::Minor);
        assert!(is.message.contains("hard worker"));
        assert!(is.message.contains("team player"));
        assert_eq!(res.score.breakdown.format, 20 - 3);
    }

    #[test]
    fn test_weak_skills_section() {
        let text = well_formed_resume().replace(
            "Rust, Go, Python, Kubernetes, Terraform, PostgreSQL, Kafka, AWS, Linux, CI/CD pipelines",
            "Rust",
        );
        let res = score_resume(&text);
        let is = res.issues.iter().find(|i| i.id == "weak-skills-section").unwrap();
        assert_eq!(is.severity, Severity::Important);
        assert!(is.message.contains("4 characters"));
        assert_eq!(res.score.breakdown.keywords, 15 - 8);
        assert!(!res.has_issue("no-skills-keywords"));
    }

    #[test]
    fn test_strict_missing_summary_charges_content_and_sections() {
        let text = well_formed_resume().replace("Summary\n", "");
        let res = score_resume(&text);
        assert_eq!(ids(&res), vec!["missing-summary", "missing-section-summary"]);
        assert_eq!(res.score.breakdown.content, 20 - 5);
        assert_eq!(res.score.breakdown.ats_compatibility, 30 - 4);
        assert_eq!(res.score.total, 100 - 9);
    }

    #[test]
    fn test_section_words_inside_skills_list_do_not_end_it() {
        for skills in [
            "Customer experience design, Figma, user research, prototyping, accessibility audits",
            "Financial modeling, portfolio management, risk analysis, Excel, Bloomberg terminal",
        ] {
            let text = well_formed_resume().replace(
                "Rust, Go, Python, Kubernetes, Terraform, PostgreSQL, Kafka, AWS, Linux, CI/CD pipelines",
                skills,
            );
            let res = score_resume(&text);
            assert!(!res.has_issue("weak-skills-section"), "{skills}: {:?}", ids(&res));
            assert_eq!(res.score.breakdown.keywords, 15);
        }
    }

    #[test]
    fn test_skills_window_is_bounded() {
        let scorer = Scorer::with_profile(ScoringProfile::strict());
        let rest = "é".repeat(1000);
        assert_eq!(scorer.skills_window(&rest).chars().count(), 300);
        assert_eq!(scorer.skills_window(": Rust\nEducation\nBSc"), ": Rust\n");
        assert_eq!(
            scorer.skills_window("\nUX experience, Figma\nProjects:\nApp"),
            "\nUX experience, Figma\n"
        );
    }

    #[test]
    fn test_lenient_profile_checks_linkedin_not_summary() {
        let scorer = Scorer::with_profile(ScoringProfile::for_kind(ProfileKind::Lenient));
        let res = scorer.score("");
        assert!(res.has_issue("missing-linkedin"));
        assert!(!res.has_issue("missing-summary"));
        assert!(!res.has_issue("missing-section-certifications"));
        assert_eq!(res.score.total, 23);
        assert_eq!(res.issues.len(), 11);
        let linkedin = res.issues.iter().find(|i| i.id == "missing-linkedin").unwrap();
        assert_eq!(linkedin.severity, Severity::Minor);
    }

    #[test]
    fn test_missing_section_severity() {
        let res = score_resume("");
        let sev = |id: &str| res.issues.iter().find(|i| i.id == id).unwrap().severity;
        assert_eq!(sev("missing-section-experience"), Severity::Critical);
        assert_eq!(sev("missing-section-education"), Severity::Critical);
        assert_eq!(sev("missing-section-skills"), Severity::Critical);
        assert_eq!(sev("missing-section-projects"), Severity::Important);
        assert_eq!(sev("missing-section-certifications"), Severity::Important);
    }
}
