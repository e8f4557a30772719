//! Error type for the config, pattern and file layers.
//!
//! The scoring engine itself has no error outcome; these errors only arise
//! around it (reading files, parsing config, compiling user patterns).

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AtsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("invalid pattern list '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown profile '{0}' (expected strict|lenient)")]
    UnknownProfile(String),

    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("issue '{0}' has no quick fix")]
    NotFixable(String),
}

pub type Result<T> = std::result::Result<T, AtsError>;
