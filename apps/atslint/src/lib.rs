//! atslint core library.
//!
//! Scores plain-text résumés against the parsing habits of applicant
//! tracking systems: a 0–100 total split into five categories plus a list of
//! issues with severity and remediation.
//!
//! High-level modules:
//! - `patterns`: Compiled regex library (contact, sections, impact, visuals, buzzwords).
//! - `profile`: Strict and lenient category weights and penalties.
//! - `scoring`: The pure scoring engine and result assembly.
//! - `fixes`: Issue-id convention table and quick-fix insertion.
//! - `compare`: Score deltas between two versions of a résumé.
//! - `lint`: Batch scoring of glob-matched files.
//! - `config`: Discovery and effective configuration resolution.
//! - `models`: Result, issue and report structs.
//! - `output`: Human/JSON printers.
//! - `cli`: CLI argument parsing (binary uses this).
//!
//! ```
//! let result = atslint::score_resume("");
//! assert_eq!(result.score.total, 14);
//! ```
pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod fixes;
pub mod lint;
pub mod models;
pub mod output;
pub mod patterns;
pub mod profile;
pub mod scoring;
pub mod utils;

pub use scoring::score_resume;
