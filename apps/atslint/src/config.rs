//! Configuration discovery and effective settings resolution.
//!
//! atslint reads `atslint.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `profile`: `strict`
//! - `output`: `human`
//! - `min_score`: 0 (never fails)
//! - `files`: none (paths must come from the CLI)
//! - `[patterns]`: no extensions
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{AtsError, Result};
use crate::models::SectionName;
use crate::patterns::PatternSet;
use crate::profile::{ProfileKind, ScoringProfile};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_NAMES: [&str; 3] = ["atslint.toml", "atslint.yaml", "atslint.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Pattern list extensions under `[patterns]`. Entries are appended to the built-in lists.
pub struct PatternsCfg {
    #[serde(default)]
    pub buzzwords: Vec<String>,
    #[serde(default)]
    pub visual_elements: Vec<String>,
    #[serde(default)]
    pub result_nouns: Vec<String>,
    #[serde(default)]
    pub sections: BTreeMap<String, Vec<String>>, // [patterns.sections] skills = ["toolbox"]
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `atslint.toml|yaml`.
pub struct AtslintConfig {
    pub profile: Option<String>,
    pub output: Option<String>,
    pub min_score: Option<u32>,
    #[serde(default)]
    pub files: Option<Vec<String>>,
    #[serde(default)]
    pub patterns: Option<PatternsCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub profile: ScoringProfile,
    pub output: String,
    pub min_score: u32,
    pub files: Vec<String>,
    pub patterns: PatternSet,
}

impl Effective {
    /// True when config added phrases beyond the built-in lists.
    pub fn has_custom_patterns(&self) -> bool {
        self.patterns != PatternSet::default()
    }
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when an `atslint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `AtslintConfig` from the first config file present under `root`.
///
/// A missing file is `Ok(None)`; an unreadable or malformed one is an error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, AtslintConfig)>> {
    for name in CONFIG_NAMES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| AtsError::Io {
            path: path.clone(),
            source,
        })?;
        let cfg: AtslintConfig = if name.ends_with(".toml") {
            toml::from_str(&s).map_err(|e| AtsError::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?
        } else {
            serde_yaml::from_str(&s).map_err(|e| AtsError::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?
        };
        debug!(path = %path.display(), "config loaded");
        return Ok(Some((path, cfg)));
    }
    Ok(None)
}

/// Built-in lists plus config extensions.
pub fn build_pattern_set(cfg: Option<&PatternsCfg>) -> Result<PatternSet> {
    let mut set = PatternSet::default();
    let Some(cfg) = cfg else {
        return Ok(set);
    };
    set.extend_buzzwords(&cfg.buzzwords);
    set.extend_visual_elements(&cfg.visual_elements);
    set.extend_result_nouns(&cfg.result_nouns);
    for (name, extra) in &cfg.sections {
        let section =
            SectionName::parse(name).ok_or_else(|| AtsError::UnknownSection(name.clone()))?;
        set.extend_section(section, extra);
    }
    Ok(set)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_profile: Option<&str>,
    cli_output: Option<&str>,
    cli_min_score: Option<u32>,
) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((p, c)) => (Some(p), c),
        None => (None, AtslintConfig::default()),
    };

    let profile_kind: ProfileKind = match cli_profile.map(str::to_string).or(cfg.profile) {
        Some(s) => s.parse()?,
        None => ProfileKind::default(),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let min_score = cli_min_score.or(cfg.min_score).unwrap_or(0);
    let files = cfg.files.unwrap_or_default();
    let patterns = build_pattern_set(cfg.patterns.as_ref())?;

    Ok(Effective {
        repo_root,
        config_path,
        profile: ScoringProfile::for_kind(profile_kind),
        output,
        min_score,
        files,
        patterns,
    })
}
