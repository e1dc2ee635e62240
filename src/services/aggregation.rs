use thiserror::Error;
use tracing::debug;

use crate::domain::aggregated_record::{AggregatedBottleneck, AggregatedRecord, PeriodSummary};
use crate::domain::daily_record::{DailyRecord, WorkstationStatus};
use crate::domain::dataset::SimulationDataset;
use crate::domain::period::PeriodKind;
use crate::services::bottleneck::{bottleneck_station, BottleneckError};
use crate::services::windowing::{total_instances, window_range};

#[derive(Error, Debug, PartialEq)]
pub enum AggregationError {
    #[error("cannot aggregate an empty window")]
    EmptyWindow,
    #[error("window produced no products, rejection percentage is undefined")]
    ZeroTotalProducts,
    #[error("{field} total overflows a 64-bit count")]
    CountOverflow { field: &'static str },
    #[error("{period} instance {instance} is out of range ({total_instances} available)")]
    InstanceOutOfRange {
        period: PeriodKind,
        instance: usize,
        total_instances: usize,
    },
    #[error("day {day}: {field} has {actual} workstations, expected {expected}")]
    WorkstationCountMismatch {
        day: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error(transparent)]
    Bottleneck(#[from] BottleneckError),
}

/// Rolls a window of daily records up into one record.
///
/// Counts are summed, rates and per-workstation vectors are averaged over the
/// actual window length. Optional substructures are aggregated only when every
/// day in the window carries them.
pub fn aggregate_records(records: &[DailyRecord]) -> Result<AggregatedRecord, AggregationError> {
    let first = records.first().ok_or(AggregationError::EmptyWindow)?;
    let workstations = first.workstation_count();

    let accepted_products = checked_sum(records, "accepted_products", |r| r.accepted_products)?;
    let rejected_products = checked_sum(records, "rejected_products", |r| r.rejected_products)?;
    let total_products = accepted_products
        .checked_add(rejected_products)
        .ok_or(AggregationError::CountOverflow {
            field: "total_products",
        })?;
    let accidents = checked_sum(records, "accidents", |r| r.accidents)?;
    if total_products == 0 {
        return Err(AggregationError::ZeroTotalProducts);
    }
    let production_rejection_percentage = rejected_products as f64 / total_products as f64 * 100.0;

    let occupancy_per_workstation = mean_vector(records, workstations, "occupancy_per_workstation", |r| {
        Some(r.occupancy_per_workstation.as_slice())
    })?;
    let avg_production_time = mean_vector(records, workstations, "avg_production_time", |r| {
        Some(r.avg_production_time.as_slice())
    })?;

    Ok(AggregatedRecord {
        accepted_products,
        rejected_products,
        total_products,
        production_rejection_percentage,
        occupancy_per_workstation,
        avg_production_time,
        avg_delay_time: mean(records, |r| r.avg_delay_time),
        accident_rate: mean(records, |r| r.accident_rate),
        supplier_occupancy: mean(records, |r| r.supplier_occupancy),
        avg_fix_time: mean(records, |r| r.avg_fix_time),
        avg_bottleneck_delay: mean(records, |r| r.avg_bottleneck_delay),
        faulty_product_rate: mean(records, |r| r.faulty_product_rate),
        accidents,
        workstation_status: aggregate_status(records, workstations)?,
        bottleneck_workstations: aggregate_bottleneck(records, workstations)?,
    })
}

/// Aggregates window `instance` of `period` over the dataset.
pub fn aggregate_instance(
    dataset: &SimulationDataset,
    period: PeriodKind,
    instance: usize,
) -> Result<PeriodSummary, AggregationError> {
    let total_instances = total_instances(dataset.len(), period);
    let range = window_range(dataset.len(), period, instance).ok_or(
        AggregationError::InstanceOutOfRange {
            period,
            instance,
            total_instances,
        },
    )?;
    debug!(%period, instance, start = range.start, end = range.end, "aggregating window");

    let record = aggregate_records(dataset.slice(range.clone()))?;
    Ok(PeriodSummary {
        period,
        instance,
        total_instances,
        first_day: range.start,
        last_day: range.end - 1,
        days: range.len(),
        record,
    })
}

/// Aggregates the most recent window, which is what a period switch shows first.
pub fn aggregate_latest(
    dataset: &SimulationDataset,
    period: PeriodKind,
) -> Result<PeriodSummary, AggregationError> {
    let latest = total_instances(dataset.len(), period).saturating_sub(1);
    aggregate_instance(dataset, period, latest)
}

fn checked_sum(
    records: &[DailyRecord],
    field: &'static str,
    count: impl Fn(&DailyRecord) -> u64,
) -> Result<u64, AggregationError> {
    records
        .iter()
        .try_fold(0u64, |acc, r| acc.checked_add(count(r)))
        .ok_or(AggregationError::CountOverflow { field })
}

fn mean(records: &[DailyRecord], value: impl Fn(&DailyRecord) -> f64) -> f64 {
    records.iter().map(value).sum::<f64>() / records.len() as f64
}

fn mean_vector<'a>(
    records: &'a [DailyRecord],
    width: usize,
    field: &'static str,
    vector: impl Fn(&'a DailyRecord) -> Option<&'a [f64]>,
) -> Result<Vec<f64>, AggregationError> {
    let mut sums = vec![0.0_f64; width];
    for (day, record) in records.iter().enumerate() {
        let Some(values) = vector(record) else {
            continue;
        };
        check_width(day, field, width, values.len())?;
        for (sum, value) in sums.iter_mut().zip(values) {
            *sum += value;
        }
    }
    let days = records.len() as f64;
    Ok(sums.into_iter().map(|sum| sum / days).collect())
}

fn aggregate_status(
    records: &[DailyRecord],
    width: usize,
) -> Result<Option<Vec<WorkstationStatus>>, AggregationError> {
    if !records.iter().all(|r| r.workstation_status.is_some()) {
        return Ok(None);
    }
    let mut sums = vec![WorkstationStatus::default(); width];
    for (day, record) in records.iter().enumerate() {
        let Some(status) = &record.workstation_status else {
            continue;
        };
        check_width(day, "workstation_status", width, status.len())?;
        for (sum, value) in sums.iter_mut().zip(status) {
            sum.operational += value.operational;
            sum.downtime += value.downtime;
            sum.waiting_for_restock += value.waiting_for_restock;
        }
    }
    let days = records.len() as f64;
    Ok(Some(
        sums.into_iter()
            .map(|sum| WorkstationStatus {
                operational: sum.operational / days,
                downtime: sum.downtime / days,
                waiting_for_restock: sum.waiting_for_restock / days,
            })
            .collect(),
    ))
}

fn aggregate_bottleneck(
    records: &[DailyRecord],
    width: usize,
) -> Result<Option<AggregatedBottleneck>, AggregationError> {
    if !records.iter().all(|r| r.bottleneck_workstations.is_some()) {
        return Ok(None);
    }
    let waiting_times = mean_vector(records, width, "bottleneck_workstations.waiting_times", |r| {
        r.bottleneck_workstations
            .as_ref()
            .map(|b| b.waiting_times.as_slice())
    })?;
    let max_waiting_time = records
        .iter()
        .filter_map(|r| r.bottleneck_workstations.as_ref())
        .map(|b| b.max_waiting_time)
        .fold(f64::NEG_INFINITY, f64::max);
    let bottleneck_station = bottleneck_station(&waiting_times)?;

    Ok(Some(AggregatedBottleneck {
        waiting_times,
        max_waiting_time,
        bottleneck_station,
    }))
}

fn check_width(
    day: usize,
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), AggregationError> {
    if expected == actual {
        Ok(())
    } else {
        Err(AggregationError::WorkstationCountMismatch {
            day,
            field,
            expected,
            actual,
        })
    }
}
