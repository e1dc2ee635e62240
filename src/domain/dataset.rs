use std::ops::Range;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::daily_record::DailyRecord;

#[derive(Error, Debug, PartialEq)]
pub enum DatasetError {
    #[error("dataset contains no daily records")]
    Empty,
    #[error("day {day}: {field} has {actual} workstations, expected {expected}")]
    WorkstationCountMismatch {
        day: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Which optional substructures every day of the dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldPresence {
    pub workstation_status: bool,
    pub bottleneck_workstations: bool,
}

/// Validated daily records, fixed once at load time.
///
/// All days share one workstation count, and each optional field is either
/// present on every day or absent on every day.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationDataset {
    records: Vec<DailyRecord>,
    workstation_count: usize,
    presence: FieldPresence,
}

impl SimulationDataset {
    pub fn new(mut records: Vec<DailyRecord>) -> Result<Self, DatasetError> {
        let workstation_count = records
            .first()
            .map(DailyRecord::workstation_count)
            .ok_or(DatasetError::Empty)?;

        for (day, record) in records.iter().enumerate() {
            check_width(
                day,
                "occupancy_per_workstation",
                workstation_count,
                record.occupancy_per_workstation.len(),
            )?;
            check_width(
                day,
                "avg_production_time",
                workstation_count,
                record.avg_production_time.len(),
            )?;
            if let Some(status) = &record.workstation_status {
                check_width(day, "workstation_status", workstation_count, status.len())?;
            }
            if let Some(bottleneck) = &record.bottleneck_workstations {
                check_width(
                    day,
                    "bottleneck_workstations.waiting_times",
                    workstation_count,
                    bottleneck.waiting_times.len(),
                )?;
            }
        }

        let status_days = records.iter().filter(|r| r.workstation_status.is_some()).count();
        let bottleneck_days = records
            .iter()
            .filter(|r| r.bottleneck_workstations.is_some())
            .count();

        let presence = FieldPresence {
            workstation_status: settle_presence("workstation_status", status_days, records.len()),
            bottleneck_workstations: settle_presence(
                "bottleneck_workstations",
                bottleneck_days,
                records.len(),
            ),
        };

        if !presence.workstation_status {
            records.iter_mut().for_each(|r| r.workstation_status = None);
        }
        if !presence.bottleneck_workstations {
            records.iter_mut().for_each(|r| r.bottleneck_workstations = None);
        }

        info!(
            days = records.len(),
            workstations = workstation_count,
            workstation_status = presence.workstation_status,
            bottleneck_workstations = presence.bottleneck_workstations,
            "loaded simulation dataset"
        );

        Ok(Self {
            records,
            workstation_count,
            presence,
        })
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn workstation_count(&self) -> usize {
        self.workstation_count
    }

    pub fn presence(&self) -> FieldPresence {
        self.presence
    }

    pub fn slice(&self, range: Range<usize>) -> &[DailyRecord] {
        let end = range.end.min(self.records.len());
        let start = range.start.min(end);
        &self.records[start..end]
    }
}

fn check_width(
    day: usize,
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), DatasetError> {
    if expected == actual {
        Ok(())
    } else {
        Err(DatasetError::WorkstationCountMismatch {
            day,
            field,
            expected,
            actual,
        })
    }
}

fn settle_presence(field: &str, present_days: usize, total_days: usize) -> bool {
    if present_days == total_days {
        return true;
    }
    if present_days > 0 {
        warn!(
            field,
            present_days,
            total_days,
            "optional field missing on some days, treating it as absent for the whole dataset"
        );
    }
    false
}
