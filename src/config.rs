//! Configuration for indexing and tracing
//!
//! Loaded from the first of these that exists:
//! 1. `./flatmap.yaml`
//! 2. `<config dir>/flatmap/config.yaml` (e.g. `~/.config/flatmap/config.yaml`)
//! 3. Built-in defaults
//!
//! `FLATMAP_DIRECTION` and `FLATMAP_MAX_CHAIN_LENGTH` override file values.

use crate::graph::{FilterReport, FlatmapError, FlatmapResult, GraphExport};
use crate::index::Direction;
use crate::route::DEFAULT_MAX_CHAIN_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const LOCAL_CONFIG: &str = "flatmap.yaml";

/// Settings shared by the CLI and library callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatmapConfig {
    /// Orientation of the indexed tree
    pub direction: Direction,
    /// Bound on parts walked per chain before reporting a cycle
    pub max_chain_length: usize,
    /// Drop `owl:Nothing` and has-part edges before indexing
    pub filter_structural: bool,
}

impl Default for FlatmapConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Incoming,
            max_chain_length: DEFAULT_MAX_CHAIN_LENGTH,
            filter_structural: true,
        }
    }
}

impl FlatmapConfig {
    /// Load from the default locations, falling back to defaults
    pub fn load() -> FlatmapResult<Self> {
        if Path::new(LOCAL_CONFIG).exists() {
            return Self::from_file(LOCAL_CONFIG);
        }
        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from a specific YAML file
    pub fn from_file(path: impl AsRef<Path>) -> FlatmapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse and validate YAML content, without environment overrides
    pub fn from_yaml(content: &str) -> FlatmapResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/flatmap/config.yaml`, when the platform has a config dir
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flatmap").join("config.yaml"))
    }

    /// Apply `FLATMAP_*` overrides read through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> FlatmapResult<()> {
        if let Some(direction) = lookup("FLATMAP_DIRECTION") {
            self.direction = direction.parse()?;
        }
        if let Some(length) = lookup("FLATMAP_MAX_CHAIN_LENGTH") {
            self.max_chain_length = length
                .parse()
                .map_err(|_| FlatmapError::Config(format!("FLATMAP_MAX_CHAIN_LENGTH={length}")))?;
        }
        self.validate()
    }

    /// The export as it should be indexed, with the structural edge counts
    ///
    /// Structural edges are dropped only when `filter_structural` is set; the
    /// report is computed either way.
    pub fn prepare_export(&self, export: GraphExport) -> (GraphExport, FilterReport) {
        if self.filter_structural {
            return export.without_structural_edges();
        }
        let report = export.structural_report();
        debug!(?report, "structural edges kept");
        (export, report)
    }

    fn validate(&self) -> FlatmapResult<()> {
        if self.max_chain_length == 0 {
            return Err(FlatmapError::Config("max_chain_length must be at least 1".into()));
        }
        Ok(())
    }
}
