use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::daily_record::DailyRecord;

#[derive(Error, Debug, PartialEq)]
pub enum CorrelationError {
    #[error("cannot build a scatter series from zero days")]
    EmptyInput,
    #[error("day {day} has no {field} data")]
    MissingField { day: usize, field: &'static str },
    #[error("workstation {station} is outside {workstations} workstations")]
    StationOutOfRange { station: usize, workstations: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationKind {
    /// Faulty product rate (%) against average delay time.
    DelayVsFaultyRate,
    /// Average delay time against accepted products.
    AcceptedVsDelay,
}

impl CorrelationKind {
    pub fn axis_labels(self) -> (&'static str, &'static str) {
        match self {
            CorrelationKind::DelayVsFaultyRate => ("Average Delay Time", "Faulty Product Rate (%)"),
            CorrelationKind::AcceptedVsDelay => ("Accepted Products", "Average Delay Time"),
        }
    }

    fn coordinates(self, record: &DailyRecord) -> (f64, f64) {
        match self {
            CorrelationKind::DelayVsFaultyRate => {
                (record.avg_delay_time, record.faulty_product_rate * 100.0)
            }
            CorrelationKind::AcceptedVsDelay => (record.accepted_products as f64, record.avg_delay_time),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        values.fold(None, |extent, value| match extent {
            None => Some(Extent { min: value, max: value }),
            Some(Extent { min, max }) => Some(Extent {
                min: min.min(value),
                max: max.max(value),
            }),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub day: usize,
    pub x: f64,
    pub y: f64,
    /// Waiting time at the colour workstation.
    pub color: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub kind: CorrelationKind,
    pub x_label: String,
    pub y_label: String,
    pub color_station: usize,
    pub points: Vec<ScatterPoint>,
    pub x_extent: Extent,
    pub y_extent: Extent,
    pub color_extent: Extent,
}

/// Per-day scatter points coloured by the waiting time at `station`.
pub fn correlation_series(
    records: &[DailyRecord],
    kind: CorrelationKind,
    station: usize,
) -> Result<ScatterSeries, CorrelationError> {
    let mut points = Vec::with_capacity(records.len());
    for (day, record) in records.iter().enumerate() {
        let bottleneck = record
            .bottleneck_workstations
            .as_ref()
            .ok_or(CorrelationError::MissingField {
                day,
                field: "bottleneck_workstations",
            })?;
        let color = *bottleneck
            .waiting_times
            .get(station)
            .ok_or(CorrelationError::StationOutOfRange {
                station,
                workstations: bottleneck.waiting_times.len(),
            })?;
        let (x, y) = kind.coordinates(record);
        points.push(ScatterPoint { day, x, y, color });
    }

    let x_extent = Extent::of(points.iter().map(|p| p.x)).ok_or(CorrelationError::EmptyInput)?;
    let y_extent = Extent::of(points.iter().map(|p| p.y)).ok_or(CorrelationError::EmptyInput)?;
    let color_extent = Extent::of(points.iter().map(|p| p.color)).ok_or(CorrelationError::EmptyInput)?;
    let (x_label, y_label) = kind.axis_labels();

    Ok(ScatterSeries {
        kind,
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        color_station: station,
        points,
        x_extent,
        y_extent,
        color_extent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{build_day, with_bottleneck};

    #[test]
    fn delay_vs_faulty_rate_scales_rate_to_percent() {
        let mut first = with_bottleneck(build_day(90, 10, &[0.5, 0.5]), &[2.0, 1.0], 2.0);
        first.avg_delay_time = 3.0;
        let mut second = with_bottleneck(build_day(80, 20, &[0.5, 0.5]), &[5.0, 1.0], 5.0);
        second.avg_delay_time = 1.0;

        let series = correlation_series(&[first, second], CorrelationKind::DelayVsFaultyRate, 0).unwrap();
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].x, 3.0);
        assert!((series.points[0].y - 10.0).abs() < 1e-9);
        assert_eq!(series.x_extent, Extent { min: 1.0, max: 3.0 });
        assert_eq!(series.color_extent, Extent { min: 2.0, max: 5.0 });
        assert_eq!(series.y_label, "Faulty Product Rate (%)");
    }

    #[test]
    fn accepted_vs_delay_uses_product_counts() {
        let records = vec![
            with_bottleneck(build_day(90, 10, &[0.5, 0.5]), &[2.0, 1.0], 2.0),
            with_bottleneck(build_day(120, 10, &[0.5, 0.5]), &[5.0, 4.0], 5.0),
        ];

        let series = correlation_series(&records, CorrelationKind::AcceptedVsDelay, 1).unwrap();
        assert_eq!(series.x_extent, Extent { min: 90.0, max: 120.0 });
        assert_eq!(series.color_extent, Extent { min: 1.0, max: 4.0 });
    }

    #[test]
    fn missing_bottleneck_data_is_reported() {
        let records = vec![build_day(90, 10, &[0.5])];

        assert_eq!(
            correlation_series(&records, CorrelationKind::AcceptedVsDelay, 0),
            Err(CorrelationError::MissingField {
                day: 0,
                field: "bottleneck_workstations",
            })
        );
    }

    #[test]
    fn station_outside_workstations_is_rejected() {
        let records = vec![with_bottleneck(build_day(90, 10, &[0.5]), &[2.0], 2.0)];

        assert_eq!(
            correlation_series(&records, CorrelationKind::AcceptedVsDelay, 3),
            Err(CorrelationError::StationOutOfRange {
                station: 3,
                workstations: 1,
            })
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(
            correlation_series(&[], CorrelationKind::AcceptedVsDelay, 0),
            Err(CorrelationError::EmptyInput)
        );
    }
}
