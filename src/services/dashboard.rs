use serde::Serialize;
use thiserror::Error;

use crate::domain::aggregated_record::PeriodSummary;
use crate::domain::dataset::SimulationDataset;
use crate::domain::distribution::DistributionSummary;
use crate::domain::period::PeriodKind;
use crate::services::aggregation::{aggregate_instance, AggregationError};
use crate::services::distribution::{metric_series, summarize_distribution, MetricField, StatisticsError};

#[derive(Error, Debug, PartialEq)]
pub enum DashboardError {
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error(transparent)]
    Statistics(#[from] StatisticsError),
}

/// Everything a render pass needs for one navigation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary: PeriodSummary,
    /// Spread of the daily rejection percentage over the whole dataset.
    pub rejection_distribution: DistributionSummary,
}

pub fn build_dashboard_view(
    dataset: &SimulationDataset,
    period: PeriodKind,
    instance: usize,
) -> Result<DashboardView, DashboardError> {
    let summary = aggregate_instance(dataset, period, instance)?;
    let rejection_distribution = summarize_distribution(&metric_series(
        dataset.records(),
        MetricField::ProductionRejectionPercentage,
    ))?;
    Ok(DashboardView {
        summary,
        rejection_distribution,
    })
}
