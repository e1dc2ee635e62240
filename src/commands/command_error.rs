use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::aggregation::AggregationError;
use crate::services::bottleneck::BottleneckError;
use crate::services::box_plot::BoxPlotError;
use crate::services::correlation::CorrelationError;
use crate::services::dashboard::DashboardError;
use crate::services::distribution::StatisticsError;
use crate::services::occupancy::OccupancyError;
use crate::services::occupancy_plot::OccupancyPlotError;
use crate::services::playback::PlaybackError;
use crate::services::records_json::LoadError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to load simulation data: {0}")]
    Load(#[from] LoadError),
    #[error("Failed to aggregate records: {0}")]
    Aggregation(#[from] AggregationError),
    #[error("Failed to summarize distribution: {0}")]
    Statistics(#[from] StatisticsError),
    #[error("Failed to build dashboard view: {0}")]
    Dashboard(#[from] DashboardError),
    #[error("Failed to analyse bottlenecks: {0}")]
    Bottleneck(#[from] BottleneckError),
    #[error("Failed to compare occupancy: {0}")]
    Occupancy(#[from] OccupancyError),
    #[error("Failed to build correlation series: {0}")]
    Correlation(#[from] CorrelationError),
    #[error("Failed to run playback: {0}")]
    Playback(#[from] PlaybackError),
    #[error("Failed to plot distribution: {0}")]
    BoxPlot(#[from] BoxPlotError),
    #[error("Failed to plot occupancy: {0}")]
    OccupancyPlot(#[from] OccupancyPlotError),
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_yaml::Error),
    #[error("Failed to write output file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("Occupancy target must be within [0, 1], got {0}")]
    InvalidTarget(f64),
    #[error("Play interval must be greater than zero")]
    InvalidInterval,
}
