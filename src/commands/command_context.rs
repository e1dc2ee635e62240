use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use crate::commands::command_error::CommandError;
use crate::config::DashboardConfig;
use crate::domain::dataset::SimulationDataset;
use crate::services::data_source::resolve_data_path;
use crate::services::records_json::load_dataset_from_json_file;

/// Settings shared by every data command: the config plus the resolved input path.
pub struct CommandContext {
    pub config: DashboardConfig,
    input: Option<String>,
}

impl CommandContext {
    pub fn new(input: Option<String>, config_path: Option<&str>) -> Result<Self, CommandError> {
        let config = DashboardConfig::load(config_path.map(Path::new))?;
        Ok(Self { config, input })
    }

    pub fn data_path(&self) -> Result<PathBuf, CommandError> {
        let requested = self.input.as_deref().unwrap_or(&self.config.data_path);
        Ok(resolve_data_path(requested)?)
    }

    pub fn load_dataset(&self) -> Result<(PathBuf, SimulationDataset), CommandError> {
        let path = self.data_path()?;
        let dataset = load_dataset_from_json_file(&path)?;
        debug!(path = %path.display(), days = dataset.len(), "dataset ready");
        Ok((path, dataset))
    }
}

/// YAML document written by the `--output` flags.
#[derive(Debug, Serialize)]
pub struct Report<T: Serialize> {
    pub generated_at: DateTime<Local>,
    pub data_source: String,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Report<T> {
    pub fn new(data_source: &Path, body: T) -> Self {
        Self {
            generated_at: Local::now(),
            data_source: data_source.display().to_string(),
            body,
        }
    }
}

pub async fn write_yaml<T: Serialize>(output: &str, value: &T) -> Result<(), CommandError> {
    let yaml = serde_yaml::to_string(value)?;
    tokio::fs::write(output, yaml)
        .await
        .map_err(|source| CommandError::Write {
            path: PathBuf::from(output),
            source,
        })
}
