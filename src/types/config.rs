//! Graph and CLI configuration with optional TOML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{NetworkError, NetworkResult};

/// Behaviour switches for the graph engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// When set, connecting an already-connected pair appends nothing.
    pub dedup_connections: bool,
}

/// How the menu renders operation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per result.
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Settings for the `socnet` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format for results.
    pub format: OutputFormat,
    /// Print the welcome banner on startup.
    pub show_banner: bool,
    /// Engine settings.
    pub graph: GraphConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_banner: true,
            graph: GraphConfig::default(),
        }
    }
}

impl CliConfig {
    /// Parse a config from TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> NetworkResult<Self> {
        toml::from_str(text).map_err(|e| NetworkError::Config(e.to_string()))
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> NetworkResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| NetworkError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Start from the config file if one is given, otherwise from defaults,
    /// then apply command-line overrides.
    pub fn resolve(path: Option<&Path>, overrides: &CliOverrides) -> NetworkResult<Self> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        base.merge_overrides(overrides)
    }

    /// Apply command-line overrides. Flags only ever switch settings on, so
    /// an absent flag keeps the file's value.
    pub fn merge_overrides(mut self, overrides: &CliOverrides) -> NetworkResult<Self> {
        if let Some(name) = &overrides.format {
            self.format = OutputFormat::from_name(name)
                .ok_or_else(|| NetworkError::Config(format!("invalid output format: {}", name)))?;
        }
        if overrides.dedup_connections {
            self.graph.dedup_connections = true;
        }
        if overrides.quiet_banner {
            self.show_banner = false;
        }
        Ok(self)
    }
}

/// Settings given on the command line, applied over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Output format name ("text" or "json").
    pub format: Option<String>,
    /// Turn on duplicate-connection suppression.
    pub dedup_connections: bool,
    /// Suppress the welcome banner.
    pub quiet_banner: bool,
}
