//! Run configuration.
//!
//! The whole run is driven by one TOML file declaring project-wide
//! settings, output paths and the per-language corpus lists. The parsed
//! value is threaded through the pipeline explicitly; there is no global
//! configuration state.
//!
//! ```toml
//! [project]
//! cutoff_date = "2022-11-30"
//! min_tokens = 8
//! deduplicate = true
//! output_combined = true
//!
//! [paths]
//! clean_root = "data/clean"
//!
//! [[languages]]
//! code = "deu"
//! name = "German"
//! raw_dir = "data/raw/deu"
//! corpora = ["deu_news_2022_30K"]
//! special_rules = { split_2022_by_month = true }
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    pub paths: PathsConfig,
    #[serde(default)]
    pub languages: Vec<LanguageConfig>,
}

impl Config {
    /// Read and parse a configuration file. A missing or unparsable file
    /// is fatal.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}

/// Project-wide settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_cutoff_date")]
    pub cutoff_date: NaiveDate,
    #[serde(default = "default_min_tokens")]
    pub min_tokens: usize,
    #[serde(default = "default_enabled")]
    pub deduplicate: bool,
    #[serde(default = "default_enabled")]
    pub output_combined: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            cutoff_date: default_cutoff_date(),
            min_tokens: default_min_tokens(),
            deduplicate: true,
            output_combined: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Output directory for cleaned tables.
    pub clean_root: PathBuf,
}

/// One configured language and its declared corpora.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    pub code: String,
    pub name: String,
    pub raw_dir: PathBuf,
    #[serde(default)]
    pub corpora: Vec<String>,
    #[serde(default)]
    pub special_rules: SpecialRules,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecialRules {
    /// Split 2022 sentences by month instead of by the cutoff date.
    /// Only honored for German corpora with trusted dates.
    #[serde(default)]
    pub split_2022_by_month: bool,
}

fn default_cutoff_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 11, 30).unwrap()
}

fn default_min_tokens() -> usize {
    8
}

fn default_enabled() -> bool {
    true
}
