use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::daily_record::DailyRecord;
use crate::domain::distribution::DistributionSummary;
use crate::services::percentiles::{quantile_sorted, sorted_copy};

const FENCE_FACTOR: f64 = 1.5;

#[derive(Error, Debug, PartialEq)]
pub enum StatisticsError {
    #[error("cannot summarize an empty series")]
    EmptyInput,
    #[error("value at position {index} is not a number")]
    NonFiniteValue { index: usize },
}

/// Scalar per-day metrics that can be fed into distribution statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    #[default]
    ProductionRejectionPercentage,
    AcceptedProducts,
    RejectedProducts,
    AvgDelayTime,
    AccidentRate,
    SupplierOccupancy,
    AvgFixTime,
    AvgBottleneckDelay,
    FaultyProductRate,
}

impl MetricField {
    pub fn value(self, record: &DailyRecord) -> f64 {
        match self {
            MetricField::ProductionRejectionPercentage => record.production_rejection_percentage,
            MetricField::AcceptedProducts => record.accepted_products as f64,
            MetricField::RejectedProducts => record.rejected_products as f64,
            MetricField::AvgDelayTime => record.avg_delay_time,
            MetricField::AccidentRate => record.accident_rate,
            MetricField::SupplierOccupancy => record.supplier_occupancy,
            MetricField::AvgFixTime => record.avg_fix_time,
            MetricField::AvgBottleneckDelay => record.avg_bottleneck_delay,
            MetricField::FaultyProductRate => record.faulty_product_rate,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MetricField::ProductionRejectionPercentage => "Production Rejection %",
            MetricField::AcceptedProducts => "Accepted Products",
            MetricField::RejectedProducts => "Rejected Products",
            MetricField::AvgDelayTime => "Average Delay Time",
            MetricField::AccidentRate => "Accident Rate",
            MetricField::SupplierOccupancy => "Supplier Occupancy",
            MetricField::AvgFixTime => "Average Fix Time",
            MetricField::AvgBottleneckDelay => "Average Bottleneck Delay",
            MetricField::FaultyProductRate => "Faulty Product Rate",
        }
    }
}

pub fn metric_series(records: &[DailyRecord], field: MetricField) -> Vec<f64> {
    records.iter().map(|record| field.value(record)).collect()
}

/// Quartiles, 1.5×IQR fences and the outlier split of `values`.
///
/// Outliers and non-outliers are returned in ascending order.
pub fn summarize_distribution(values: &[f64]) -> Result<DistributionSummary, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::EmptyInput);
    }
    if let Some(index) = values.iter().position(|value| value.is_nan()) {
        return Err(StatisticsError::NonFiniteValue { index });
    }

    let sorted = sorted_copy(values);
    let q1 = quantile_sorted(&sorted, 0.25).ok_or(StatisticsError::EmptyInput)?;
    let median = quantile_sorted(&sorted, 0.5).ok_or(StatisticsError::EmptyInput)?;
    let q3 = quantile_sorted(&sorted, 0.75).ok_or(StatisticsError::EmptyInput)?;
    let iqr = q3 - q1;
    let lower_whisker = q1 - FENCE_FACTOR * iqr;
    let upper_whisker = q3 + FENCE_FACTOR * iqr;

    let (outliers, non_outliers): (Vec<f64>, Vec<f64>) = sorted
        .iter()
        .copied()
        .partition(|value| *value < lower_whisker || *value > upper_whisker);

    Ok(DistributionSummary {
        q1,
        median,
        q3,
        iqr,
        lower_whisker,
        upper_whisker,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        outliers,
        non_outliers,
    })
}
