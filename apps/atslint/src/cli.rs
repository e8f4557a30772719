//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "atslint",
    version,
    about = "ATS résumé scorer",
    long_about = "atslint — score plain-text résumés the way an applicant tracking system reads them.\n\nConfiguration precedence: CLI > atslint.toml > defaults.",
    after_help = "Examples:\n  atslint score resume.txt\n  atslint score 'resumes/*.txt' --profile lenient --output json\n  cat resume.txt | atslint score -\n  atslint fix resume.txt --issue missing-email --value jane@example.com --write\n  atslint compare old.txt new.txt",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current atslint version.")]
    Version,
    /// Score résumés
    #[command(
        about = "Score résumés",
        long_about = "Score each file matched by the given paths or glob patterns. With no paths, the `files` list from atslint.toml is used. Pass `-` to read from stdin.",
        after_help = "Examples:\n  atslint score resume.txt\n  atslint score 'cv/*.txt' --min-score 70"
    )]
    Score {
        #[arg(help = "Files or glob patterns; `-` reads stdin")]
        paths: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Scoring profile: strict|lenient (default: strict)")]
        profile: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Exit non-zero when any file scores below this total")]
        min_score: Option<u32>,
    },
    /// Apply a quick fix for one issue
    #[command(
        about = "Apply a quick fix",
        long_about = "Insert a contact field or section for a fixable issue id and report the score change. Files are only changed with --write.",
        after_help = "Examples:\n  atslint fix cv.txt --issue missing-phone --value '+1 555 010 0199'\n  atslint fix cv.txt --issue missing-section-skills --value 'Rust, SQL' --write"
    )]
    Fix {
        #[arg(help = "Résumé file to fix")]
        file: String,
        #[arg(long, help = "Issue id, e.g. missing-email or missing-section-skills")]
        issue: String,
        #[arg(long, help = "Value to insert")]
        value: String,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Write the fixed text back to the file")]
        write: bool,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Scoring profile: strict|lenient (default: strict)")]
        profile: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Compare two versions of a résumé
    #[command(
        about = "Compare two résumés",
        long_about = "Score both files with the same profile and print total and per-category deltas plus resolved and introduced issues."
    )]
    Compare {
        #[arg(help = "Earlier version")]
        before: String,
        #[arg(help = "Later version")]
        after: String,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Scoring profile: strict|lenient (default: strict)")]
        profile: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Show the active scoring profile
    #[command(
        about = "Show profile",
        long_about = "Print category maxima, penalties and thresholds of the effective profile."
    )]
    Profile {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Scoring profile: strict|lenient (default: strict)")]
        profile: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
