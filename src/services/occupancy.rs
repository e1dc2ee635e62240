use serde::Serialize;
use thiserror::Error;

use crate::domain::daily_record::DailyRecord;

const MEDIUM_BAND_START: f64 = 0.6;
const GOOD_BAND_START: f64 = 0.9;

#[derive(Error, Debug, PartialEq)]
pub enum OccupancyError {
    #[error("cannot compute occupancy over zero days")]
    EmptyInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyBand {
    Low,
    Medium,
    Good,
}

impl OccupancyBand {
    pub fn classify(measure: f64) -> Self {
        if measure >= GOOD_BAND_START {
            OccupancyBand::Good
        } else if measure >= MEDIUM_BAND_START {
            OccupancyBand::Medium
        } else {
            OccupancyBand::Low
        }
    }
}

/// One bar of the occupancy bullet view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyTarget {
    pub workstation: usize,
    pub measure: f64,
    pub target: f64,
    pub meets_target: bool,
    pub band: OccupancyBand,
}

/// Mean occupancy per workstation over `records`, sorted from least to most busy.
pub fn occupancy_targets(records: &[DailyRecord], target: f64) -> Result<Vec<OccupancyTarget>, OccupancyError> {
    let first = records.first().ok_or(OccupancyError::EmptyInput)?;
    let mut sums = vec![0.0_f64; first.workstation_count()];
    for record in records {
        for (sum, value) in sums.iter_mut().zip(&record.occupancy_per_workstation) {
            *sum += value;
        }
    }

    let days = records.len() as f64;
    let mut rows: Vec<OccupancyTarget> = sums
        .into_iter()
        .enumerate()
        .map(|(workstation, sum)| {
            let measure = sum / days;
            OccupancyTarget {
                workstation,
                measure,
                target,
                meets_target: measure >= target,
                band: OccupancyBand::classify(measure),
            }
        })
        .collect();
    rows.sort_by(|a, b| a.measure.total_cmp(&b.measure));
    Ok(rows)
}
