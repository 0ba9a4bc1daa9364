// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor configuration.
//!
//! Court dimensions, default placements for new actors and arrows, and
//! the playback interval. Loaded from a YAML file when the
//! `DRILLBOARD_CONFIG` environment variable names one; otherwise the
//! built-in defaults apply.

use crate::models::frame::Point;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable naming an optional config file.
pub const CONFIG_ENV_VAR: &str = "DRILLBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub court_width: f64,
    pub court_height: f64,
    /// Where a newly added actor appears in every frame.
    pub default_actor_position: Point,
    pub default_arrow_start: Point,
    pub default_arrow_end: Point,
    /// Time each frame is shown during playback.
    pub playback_interval_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            court_width: 800.0,
            court_height: 400.0,
            default_actor_position: Point::new(400.0, 200.0),
            default_arrow_start: Point::new(350.0, 200.0),
            default_arrow_end: Point::new(450.0, 200.0),
            playback_interval_ms: 1000,
        }
    }
}

impl EditorConfig {
    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms)
    }

    /// Load a config file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: EditorConfig = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `DRILLBOARD_CONFIG` if set, otherwise use defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                let config = Self::load(Path::new(&path))?;
                log::info!("Loaded config from {}", Path::new(&path).display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.playback_interval_ms == 0 {
            bail!("playback_interval_ms must be greater than zero");
        }
        if !(self.court_width > 0.0 && self.court_height > 0.0) {
            bail!(
                "court dimensions must be positive, got {}x{}",
                self.court_width,
                self.court_height
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = EditorConfig::default();
        assert_eq!(config.default_actor_position, Point::new(400.0, 200.0));
        assert_eq!(config.default_arrow_start, Point::new(350.0, 200.0));
        assert_eq!(config.default_arrow_end, Point::new(450.0, 200.0));
        assert_eq!(config.playback_interval(), Duration::from_millis(1000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "playback_interval_ms: 250").unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.playback_interval_ms, 250);
        assert_eq!(config.court_width, 800.0);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "playback_interval_ms: 0").unwrap();

        assert!(EditorConfig::load(file.path()).is_err());
    }
}
