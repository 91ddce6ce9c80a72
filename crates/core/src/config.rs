//! Dashboard configuration. Loaded once at startup from `labdash.toml` and
//! treated as immutable for the lifetime of the page; every sub-behavior
//! receives it by reference rather than through ambient globals.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::badge::BadgeKind;
use crate::table::Template;

pub const DEFAULT_CONFIG_FILE: &str = "labdash.toml";

fn default_min_query_len() -> usize {
    4
}

fn default_idle_delay_ms() -> u64 {
    750
}

fn default_reveal_delay_ms() -> u64 {
    500
}

fn default_spinner() -> bool {
    true
}

/// Search box tuning. The delays mirror the host pages: queries wait out a
/// 750ms idle window and never fire under four characters.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Suggestion endpoint, queried with a `term` parameter.
    pub endpoint: String,
    /// Navigation template carrying the placeholder token
    /// ([`crate::suggest::URL_PLACEHOLDER`]).
    pub sample_url: String,
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default = "default_idle_delay_ms")]
    pub idle_delay_ms: u64,
    #[serde(default = "default_spinner")]
    pub spinner: bool,
}

/// Badge endpoints for this deployment. Every key is optional; a missing key
/// disables that badge without affecting the others.
#[derive(Debug, Clone, Deserialize)]
pub struct BadgeConfig {
    pub assigned: Option<String>,
    pub pending: Option<String>,
    pub qc: Option<String>,
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            assigned: None,
            pending: None,
            qc: None,
            reveal_delay_ms: default_reveal_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    pub search: SearchConfig,
    #[serde(default)]
    pub badges: BadgeConfig,
    #[serde(default)]
    pub template: Template,
    /// Path to the server-rendered dataset backing the samples table.
    pub dataset: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(badges = config.enabled_badges().len(), "loaded dashboard config");
        Ok(config)
    }

    /// The badge endpoints actually configured, in display order.
    pub fn enabled_badges(&self) -> Vec<(BadgeKind, String)> {
        [
            (BadgeKind::Assigned, &self.badges.assigned),
            (BadgeKind::Pending, &self.badges.pending),
            (BadgeKind::Qc, &self.badges.qc),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.as_ref().map(|u| (kind, u.clone())))
        .collect()
    }
}
