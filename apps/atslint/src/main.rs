//! atslint CLI binary entry point.
//! Resolves config, builds the scorer and delegates to library modules.

use atslint::cli::{Cli, Commands};
use atslint::config::{self, Effective};
use atslint::lint::{self, STDIN_NAME};
use atslint::models::report::ScoreReport;
use atslint::output;
use atslint::patterns::PatternLibrary;
use atslint::scoring::Scorer;
use atslint::utils::{error_prefix, note_prefix, warn_prefix};
use atslint::{compare, fixes};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", error_prefix(), msg);
    std::process::exit(2);
}

fn effective(
    repo_root: Option<&str>,
    profile: Option<&str>,
    output: Option<&str>,
    min_score: Option<u32>,
) -> Effective {
    let eff = config::resolve_effective(repo_root, profile, output, min_score)
        .unwrap_or_else(|e| die(e));
    debug!(
        root = %eff.repo_root.display(),
        profile = eff.profile.kind.as_str(),
        "effective config"
    );
    eff
}

/// Custom patterns compile into an owned library; otherwise the shared standard one is used.
fn pattern_library(eff: &Effective) -> Option<PatternLibrary> {
    if !eff.has_custom_patterns() {
        return None;
    }
    Some(PatternLibrary::from_set(&eff.patterns).unwrap_or_else(|e| die(e)))
}

fn read_text(path: &str) -> String {
    if path == "-" {
        let mut s = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut s) {
            die(format!("cannot read stdin: {}", e));
        }
        return s;
    }
    fs::read_to_string(path).unwrap_or_else(|e| die(format!("cannot read {}: {}", path, e)))
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Score {
            paths,
            repo_root,
            profile,
            output,
            min_score,
        } => {
            let eff = effective(
                repo_root.as_deref(),
                profile.as_deref(),
                output.as_deref(),
                min_score,
            );
            let custom = pattern_library(&eff);
            let patterns = custom.as_ref().unwrap_or_else(|| PatternLibrary::standard());
            let scorer = Scorer::new(patterns, eff.profile.clone());

            let (report, errors) = if paths.iter().any(|p| p == "-") {
                if paths.len() > 1 {
                    die("`-` (stdin) cannot be combined with other paths");
                }
                let text = read_text("-");
                let scored = lint::score_text(STDIN_NAME, &text, &scorer);
                (ScoreReport::from_results(vec![scored], eff.min_score), Vec::new())
            } else if !paths.is_empty() {
                let cwd = std::env::current_dir().unwrap_or_else(|e| die(e));
                lint::run_score(&cwd, &paths, &scorer, eff.min_score)
            } else if !eff.files.is_empty() {
                if eff.output != "json" {
                    if let Some(p) = &eff.config_path {
                        eprintln!(
                            "{} using files from {}",
                            note_prefix(),
                            lint::display_path(p, &eff.repo_root)
                        );
                    }
                }
                lint::run_score(&eff.repo_root, &eff.files, &scorer, eff.min_score)
            } else {
                die("no input: pass files, `-` for stdin, or set `files` in atslint.toml");
            };

            output::print_score(&report, &eff.profile, &eff.output, &errors);
            if report.summary.files == 0 {
                std::process::exit(2);
            }
            if report.summary.below_threshold > 0 {
                std::process::exit(1);
            }
        }
        Commands::Fix {
            file,
            issue,
            value,
            write,
            repo_root,
            profile,
            output,
        } => {
            let eff = effective(
                repo_root.as_deref(),
                profile.as_deref(),
                output.as_deref(),
                None,
            );
            let custom = pattern_library(&eff);
            let patterns = custom.as_ref().unwrap_or_else(|| PatternLibrary::standard());
            let scorer = Scorer::new(patterns, eff.profile.clone());

            let Some(field) = fixes::quick_fix_for(&issue) else {
                die(atslint::error::AtsError::NotFixable(issue));
            };
            let before_text = read_text(&file);
            let after_text = fixes::apply_quick_fix(&before_text, field, &value);
            let before = scorer.score(&before_text);
            let after = scorer.score(&after_text);
            let delta = compare::compare(&before, &after);

            if write {
                if let Err(e) = fs::write(Path::new(&file), &after_text) {
                    die(format!("cannot write {}: {}", file, e));
                }
            }
            if after.has_issue(&issue) {
                warn!(issue = %issue, "issue still reported after fix");
                if eff.output != "json" {
                    eprintln!(
                        "{} '{}' is still reported; check the inserted value",
                        warn_prefix(),
                        issue
                    );
                }
            }
            output::print_fix(&file, &issue, field, &delta, write, &eff.output);
        }
        Commands::Compare {
            before,
            after,
            repo_root,
            profile,
            output,
        } => {
            let eff = effective(
                repo_root.as_deref(),
                profile.as_deref(),
                output.as_deref(),
                None,
            );
            let custom = pattern_library(&eff);
            let patterns = custom.as_ref().unwrap_or_else(|| PatternLibrary::standard());
            let scorer = Scorer::new(patterns, eff.profile.clone());

            let a = scorer.score(&read_text(&before));
            let b = scorer.score(&read_text(&after));
            let delta = compare::compare(&a, &b);
            output::print_compare(&before, &after, &delta, &eff.output);
        }
        Commands::Profile {
            repo_root,
            profile,
            output,
        } => {
            let eff = effective(
                repo_root.as_deref(),
                profile.as_deref(),
                output.as_deref(),
                None,
            );
            output::print_profile(&eff.profile, &eff.output);
        }
    }
}
