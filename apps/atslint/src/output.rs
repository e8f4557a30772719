//! Output rendering for score, fix, compare and profile commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form mirrors the
//! library structs and adds a `quickFix` field to each issue.

use crate::compare::ScoreDelta;
use crate::fixes::{quick_fix_for, FixableField};
use crate::models::report::{FileScore, ScoreReport};
use crate::models::{Issue, ScoreBand, Severity};
use crate::profile::ScoringProfile;
use crate::utils::{error_prefix, use_colors};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn emit_json(v: &JsonVal) {
    match serde_json::to_string_pretty(v) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("{} {}", error_prefix(), e),
    }
}

fn print_errors(errors: &[String]) {
    for e in errors {
        eprintln!("{} {}", error_prefix(), e);
    }
}

fn severity_tag(sev: Severity, color: bool) -> String {
    let (icon, tag) = match sev {
        Severity::Critical => ("✖", "⟦critical⟧"),
        Severity::Important => ("▲", "⟦important⟧"),
        Severity::Minor => ("◆", "⟦minor⟧"),
    };
    if !color {
        return format!("{} {}", icon, tag);
    }
    match sev {
        Severity::Critical => format!("{} {}", icon.red(), tag.red().bold()),
        Severity::Important => format!("{} {}", icon.yellow(), tag.yellow().bold()),
        Severity::Minor => format!("{} {}", icon.blue(), tag.blue().bold()),
    }
}

fn total_label(total: u32, color: bool) -> String {
    let s = format!("{}/100", total);
    if !color {
        return s;
    }
    // Dashboard colors: green from 90, yellow from 70.
    if total >= 90 {
        s.green().bold().to_string()
    } else if total >= 70 {
        s.yellow().bold().to_string()
    } else {
        s.red().bold().to_string()
    }
}

fn band_name(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "excellent",
        ScoreBand::Good => "good",
        ScoreBand::NeedsWork => "needs-work",
    }
}

fn print_issue(is: &Issue, color: bool) {
    let id = if color {
        is.id.clone().bold().to_string()
    } else {
        is.id.clone()
    };
    println!("  {} ❲{}❳ — {}", severity_tag(is.severity, color), id, is.message);
    let fix = quick_fix_for(&is.id)
        .map(|f| format!(" [quick fix: {}]", f.label()))
        .unwrap_or_default();
    if color {
        println!("      ↳ {}{}", is.remediation, fix.bright_black());
    } else {
        println!("      ↳ {}{}", is.remediation, fix);
    }
}

fn print_file_score(fs: &FileScore, profile: &ScoringProfile, color: bool) {
    let score = &fs.result.score;
    let band = score.band();
    let file = if color {
        fs.file.clone().bold().to_string()
    } else {
        fs.file.clone()
    };
    println!(
        "{} — {} ⟦{}⟧ {}",
        file,
        total_label(score.total, color),
        band_name(band),
        band.verdict()
    );
    let cats: Vec<String> = score
        .breakdown
        .entries()
        .iter()
        .map(|(cat, v)| format!("{} {}/{}", cat.label(), v, profile.max.get(*cat)))
        .collect();
    println!("  {}", cats.join(" · "));
    let d = &score.details;
    let sections: Vec<&str> = d.sections_found.iter().map(|s| s.as_str()).collect();
    let details = format!(
        "words={} pages={} email={} phone={} linkedin={} sections=[{}]",
        d.word_count,
        d.page_count_estimate,
        d.email_detected,
        d.phone_detected,
        d.linkedin_detected,
        sections.join(", ")
    );
    if color {
        println!("  {}", details.bright_black());
    } else {
        println!("  {}", details);
    }
    for is in &fs.result.issues {
        print_issue(is, color);
    }
}

/// Print score results in the requested format.
pub fn print_score(
    report: &ScoreReport,
    profile: &ScoringProfile,
    output: &str,
    errors: &[String],
) {
    match output {
        "json" => emit_json(&compose_score_json(report, profile, errors)),
        _ => {
            let color = use_colors(output);
            for fs in &report.results {
                print_file_score(fs, profile, color);
            }
            print_errors(errors);
            let s = &report.summary;
            let summary = format!(
                "— Summary — files={} average={:.1} critical={} important={} minor={} below_threshold={}",
                s.files, s.average_score, s.critical, s.important, s.minor, s.below_threshold
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

fn issue_json(is: &Issue) -> JsonVal {
    let mut v = json!(is);
    v["quickFix"] = json!(quick_fix_for(&is.id));
    v
}

/// Compose score JSON object (pure) for testing/snapshot purposes.
pub fn compose_score_json(
    report: &ScoreReport,
    profile: &ScoringProfile,
    errors: &[String],
) -> JsonVal {
    let results: Vec<JsonVal> = report
        .results
        .iter()
        .map(|fs| {
            json!({
                "file": fs.file,
                "band": fs.result.score.band(),
                "score": fs.result.score,
                "issues": fs.result.issues.iter().map(issue_json).collect::<Vec<_>>(),
            })
        })
        .collect();
    json!({
        "profile": profile.kind,
        "results": results,
        "summary": report.summary,
        "errors": errors,
    })
}

/// Print the outcome of `atslint fix`.
pub fn print_fix(
    file: &str,
    issue_id: &str,
    field: FixableField,
    delta: &ScoreDelta,
    wrote: bool,
    output: &str,
) {
    match output {
        "json" => emit_json(&json!({
            "file": file,
            "issue": issue_id,
            "field": field,
            "wrote": wrote,
            "delta": delta,
        })),
        _ => {
            let color = use_colors(output);
            let head = format!("applied {} fix for {}", field.label(), issue_id);
            if color {
                println!("{} {}", "✏️ ".green(), head.green().bold());
            } else {
                println!("✏️  {}", head);
            }
            print_delta_lines(delta, color);
            if wrote {
                println!("wrote: {}", file);
            } else {
                println!("dry run: {} unchanged (pass --write to save)", file);
            }
        }
    }
}

/// Print the outcome of `atslint compare`.
pub fn print_compare(before: &str, after: &str, delta: &ScoreDelta, output: &str) {
    match output {
        "json" => emit_json(&json!({
            "before": before,
            "after": after,
            "delta": delta,
        })),
        _ => {
            let color = use_colors(output);
            println!("{} → {}", before, after);
            print_delta_lines(delta, color);
        }
    }
}

fn signed(n: i64) -> String {
    if n > 0 {
        format!("+{}", n)
    } else {
        n.to_string()
    }
}

fn print_delta_lines(delta: &ScoreDelta, color: bool) {
    let total = format!("score {} → {} ({})", delta.before, delta.after, signed(delta.delta));
    if !color {
        println!("  {}", total);
    } else if delta.delta > 0 {
        println!("  {}", total.green().bold());
    } else if delta.delta < 0 {
        println!("  {}", total.red().bold());
    } else {
        println!("  {}", total.bold());
    }
    let cats: Vec<String> = delta
        .categories
        .iter()
        .filter(|c| c.delta != 0)
        .map(|c| format!("{} {}", c.category.label(), signed(c.delta)))
        .collect();
    if !cats.is_empty() {
        println!("  {}", cats.join(" · "));
    }
    for id in &delta.resolved {
        println!("  resolved: {}", id);
    }
    for id in &delta.introduced {
        println!("  introduced: {}", id);
    }
}

/// Print the constants of the active profile.
pub fn print_profile(profile: &ScoringProfile, output: &str) {
    match output {
        "json" => emit_json(&json!(profile)),
        _ => {
            let m = &profile.max;
            println!("profile: {}", profile.kind.as_str());
            println!(
                "  max: format={} content={} ats={} keywords={} impact={}",
                m.format, m.content, m.ats_compatibility, m.keywords, m.impact
            );
            let sections: Vec<&str> = profile.sections.iter().map(|s| s.as_str()).collect();
            println!(
                "  sections ({} pts each): {}",
                profile.section_penalty,
                sections.join(", ")
            );
            println!(
                "  contact: email={} phone={} summary={} linkedin={}",
                profile.email_penalty,
                profile.phone_penalty,
                opt(profile.summary_penalty),
                opt(profile.linkedin_penalty)
            );
            println!(
                "  length: very_short<{} (-{}) short<{} (-{}) pages>{} (-{}) words/page={}",
                profile.very_short_words,
                profile.very_short_penalty,
                profile.min_words,
                profile.short_penalty,
                profile.max_pages,
                profile.too_long_penalty,
                profile.words_per_page
            );
            println!(
                "  impact: threshold={} (-{}) · visual elements -{} · buzzwords -{}",
                profile.impact_threshold,
                profile.low_impact_penalty,
                profile.visual_element_penalty,
                profile.buzzword_penalty
            );
            println!(
                "  skills window: {} chars, weak below {} (-{})",
                profile.skills_window_chars,
                profile.weak_skills_min_chars,
                profile.weak_skills_penalty
            );
        }
    }
}

fn opt(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_else(|| "off".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use crate::scoring::score_resume;

    fn report() -> ScoreReport {
        ScoreReport::from_results(
            vec![FileScore {
                file: "cv.txt".into(),
                result: score_resume(""),
            }],
            50,
        )
    }

    #[test]
    fn test_compose_score_json_shape() {
        let out = compose_score_json(&report(), &ScoringProfile::strict(), &["oops".to_string()]);
        assert_eq!(out["profile"], "strict");
        assert_eq!(out["summary"]["files"], 1);
        assert_eq!(out["summary"]["belowThreshold"], 1);
        assert_eq!(out["results"][0]["file"], "cv.txt");
        assert_eq!(out["results"][0]["band"], "needs-work");
        assert_eq!(out["results"][0]["score"]["total"], 14);
        assert_eq!(out["results"][0]["score"]["breakdown"]["atsCompatibility"], 6);
        assert_eq!(out["errors"][0], "oops");
    }

    #[test]
    fn test_issue_json_carries_quick_fix() {
        let out = compose_score_json(&report(), &ScoringProfile::strict(), &[]);
        let issues = out["results"][0]["issues"].as_array().unwrap();
        let email = issues.iter().find(|i| i["id"] == "missing-email").unwrap();
        assert_eq!(email["quickFix"]["kind"], "email");
        let edu = issues
            .iter()
            .find(|i| i["id"] == "missing-section-education")
            .unwrap();
        assert_eq!(edu["quickFix"]["section"], "education");
        let impact = issues.iter().find(|i| i["id"] == "no-impact").unwrap();
        assert!(impact["quickFix"].is_null());
    }

    #[test]
    fn test_signed_formatting() {
        assert_eq!(signed(5), "+5");
        assert_eq!(signed(0), "0");
        assert_eq!(signed(-3), "-3");
    }

    #[test]
    fn test_delta_serializes_camel_case() {
        let d = compare(&score_resume(""), &score_resume("jane@example.com"));
        let v = json!(d);
        assert_eq!(v["resolved"][0], "missing-email");
        assert!(v["categories"][0]["category"].is_string());
    }
}
