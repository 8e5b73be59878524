//! Analyzer configuration, stored as TOML.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use match_core::{DotOptions, ParseOptions, TiePolicy, DEFAULT_MATCH_COUNT};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Output format for graph exports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Graphviz digraph
    #[default]
    Dot,
    /// Nodes and edges as JSON
    Json,
    /// One `winner -> loser` per line
    Edges,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Dot => f.write_str("dot"),
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Edges => f.write_str("edges"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(ExportFormat::Dot),
            "json" => Ok(ExportFormat::Json),
            "edges" | "edge-list" => Ok(ExportFormat::Edges),
            _ => Err(format!("unknown format `{}` (use dot, json or edges)", s)),
        }
    }
}

/// Graph export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub node_color: String,
    pub edge_color: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let dot = DotOptions::default();
        Self {
            format: ExportFormat::default(),
            node_color: dot.node_color,
            edge_color: dot.edge_color,
        }
    }
}

impl ExportConfig {
    pub fn dot_options(&self) -> DotOptions {
        DotOptions {
            node_color: self.node_color.clone(),
            edge_color: self.edge_color.clone(),
            ..Default::default()
        }
    }
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Exact number of match records per batch
    pub expected_matches: usize,
    /// Whether equal scores are rejected or go to the second team
    pub tie_policy: TiePolicy,
    pub export: ExportConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            expected_matches: DEFAULT_MATCH_COUNT,
            tie_policy: TiePolicy::default(),
            export: ExportConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            expected_matches: self.expected_matches,
            tie_policy: self.tie_policy,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
