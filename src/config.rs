use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::period::PeriodKind;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("occupancy target must be within [0, 1], got {0}")]
    InvalidOccupancyTarget(f64),
    #[error("play interval must be greater than zero")]
    InvalidPlayInterval,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// JSON results file, or a directory holding timestamped results files.
    pub data_path: String,
    pub default_period: PeriodKind,
    pub play_interval_ms: u64,
    pub occupancy_target: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: "data/test.json".to_string(),
            default_period: PeriodKind::Day,
            play_interval_ms: 1000,
            occupancy_target: 0.95,
        }
    }
}

impl DashboardConfig {
    /// Loads the config at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: DashboardConfig =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        debug!(?config, "loaded dashboard config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.occupancy_target) {
            return Err(ConfigError::InvalidOccupancyTarget(self.occupancy_target));
        }
        if self.play_interval_ms == 0 {
            return Err(ConfigError::InvalidPlayInterval);
        }
        Ok(())
    }

    pub fn play_interval(&self) -> Duration {
        Duration::from_millis(self.play_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn missing_path_yields_defaults() {
        let config = DashboardConfig::load(None).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.play_interval(), Duration::from_secs(1));
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_keys() {
        let file = assert_fs::NamedTempFile::new("simdash.yaml").unwrap();
        file.write_str("default_period: week\noccupancy_target: 0.9\n").unwrap();

        let config = DashboardConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.default_period, PeriodKind::Week);
        assert_eq!(config.occupancy_target, 0.9);
        assert_eq!(config.data_path, "data/test.json");
        assert_eq!(config.play_interval_ms, 1000);
    }

    #[test]
    fn rejects_out_of_range_target() {
        let file = assert_fs::NamedTempFile::new("simdash.yaml").unwrap();
        file.write_str("occupancy_target: 1.5\n").unwrap();

        let error = DashboardConfig::from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidOccupancyTarget(_)));
    }

    #[test]
    fn rejects_unparseable_yaml() {
        let file = assert_fs::NamedTempFile::new("simdash.yaml").unwrap();
        file.write_str("default_period: fortnight\n").unwrap();

        let error = DashboardConfig::from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }
}
