use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::daily_record::{BottleneckReport, DailyRecord, WorkstationStatus};
use crate::domain::dataset::{DatasetError, SimulationDataset};
use crate::services::bottleneck::{bottleneck_station, BottleneckError};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read simulation data {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse simulation json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("day {day}: {source}")]
    Bottleneck { day: usize, source: BottleneckError },
    #[error("bottleneck station {station} on day {day} is outside {workstations} workstations")]
    BottleneckStationOutOfRange {
        day: usize,
        station: usize,
        workstations: usize,
    },
    #[error("invalid simulation dataset: {0}")]
    Dataset(#[from] DatasetError),
    #[error("no simulation results file found in {0}")]
    NoResultsFile(PathBuf),
}

#[derive(Debug, Deserialize)]
struct DailyRecordJson {
    accepted_products: u64,
    rejected_products: u64,
    occupancy_per_workstation: Vec<f64>,
    avg_production_time: Vec<f64>,
    avg_delay_time: f64,
    accident_rate: f64,
    supplier_occupancy: f64,
    avg_fix_time: f64,
    avg_bottleneck_delay: f64,
    faulty_product_rate: f64,
    accidents: u64,
    workstation_status: Option<Vec<WorkstationStatusJson>>,
    bottleneck_workstations: Option<BottleneckJson>,
    production_rejection_percentage: f64,
}

#[derive(Debug, Deserialize)]
struct WorkstationStatusJson {
    operational: f64,
    downtime: f64,
    waiting_for_restock: f64,
}

#[derive(Debug, Deserialize)]
struct BottleneckJson {
    waiting_times: Vec<f64>,
    max_waiting_time: f64,
    bottleneck_station: Option<usize>,
}

pub fn load_dataset_from_json_file<P: AsRef<Path>>(path: P) -> Result<SimulationDataset, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "reading simulation data");
    deserialize_dataset_from_json_str(&contents)
}

pub fn deserialize_dataset_from_json_str(input: &str) -> Result<SimulationDataset, LoadError> {
    let days: Vec<DailyRecordJson> = serde_json::from_str(input)?;
    let records = days
        .into_iter()
        .enumerate()
        .map(|(day, record)| convert_record(day, record))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SimulationDataset::new(records)?)
}

fn convert_record(day: usize, record: DailyRecordJson) -> Result<DailyRecord, LoadError> {
    let workstations = record.occupancy_per_workstation.len();
    let bottleneck_workstations = match record.bottleneck_workstations {
        Some(bottleneck) => Some(convert_bottleneck(day, workstations, bottleneck)?),
        None => None,
    };

    Ok(DailyRecord {
        accepted_products: record.accepted_products,
        rejected_products: record.rejected_products,
        occupancy_per_workstation: record.occupancy_per_workstation,
        avg_production_time: record.avg_production_time,
        avg_delay_time: record.avg_delay_time,
        accident_rate: record.accident_rate,
        supplier_occupancy: record.supplier_occupancy,
        avg_fix_time: record.avg_fix_time,
        avg_bottleneck_delay: record.avg_bottleneck_delay,
        faulty_product_rate: record.faulty_product_rate,
        accidents: record.accidents,
        workstation_status: record.workstation_status.map(|status| {
            status
                .into_iter()
                .map(|s| WorkstationStatus {
                    operational: s.operational,
                    downtime: s.downtime,
                    waiting_for_restock: s.waiting_for_restock,
                })
                .collect()
        }),
        bottleneck_workstations,
        production_rejection_percentage: record.production_rejection_percentage,
    })
}

fn convert_bottleneck(
    day: usize,
    workstations: usize,
    bottleneck: BottleneckJson,
) -> Result<BottleneckReport, LoadError> {
    let bottleneck_station = match bottleneck.bottleneck_station {
        Some(station) if station < workstations => station,
        Some(station) => {
            return Err(LoadError::BottleneckStationOutOfRange {
                day,
                station,
                workstations,
            });
        }
        None => bottleneck_station(&bottleneck.waiting_times)
            .map_err(|source| LoadError::Bottleneck { day, source })?,
    };
    Ok(BottleneckReport {
        waiting_times: bottleneck.waiting_times,
        max_waiting_time: bottleneck.max_waiting_time,
        bottleneck_station,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::days_json;

    #[test]
    fn deserializes_daily_records() {
        let dataset = deserialize_dataset_from_json_str(&days_json(3)).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.workstation_count(), 3);
        let first = &dataset.records()[0];
        assert_eq!(first.accepted_products, 90);
        assert_eq!(first.avg_production_time, vec![4.0, 5.0, 6.0]);
        assert!(!dataset.presence().workstation_status);
        assert!(dataset.presence().bottleneck_workstations);
    }

    #[test]
    fn fills_missing_bottleneck_station_from_waiting_times() {
        let dataset = deserialize_dataset_from_json_str(&days_json(1)).unwrap();

        let bottleneck = dataset.records()[0].bottleneck_workstations.as_ref().unwrap();
        assert_eq!(bottleneck.bottleneck_station, 1);
    }

    #[test]
    fn keeps_reported_bottleneck_station() {
        let json = r#"[{
            "accepted_products": 5, "rejected_products": 1,
            "occupancy_per_workstation": [0.1, 0.2],
            "avg_production_time": [1.0, 2.0],
            "avg_delay_time": 0.5, "accident_rate": 0.0, "supplier_occupancy": 0.3,
            "avg_fix_time": 1.0, "avg_bottleneck_delay": 0.2, "faulty_product_rate": 0.16,
            "accidents": 0,
            "workstation_status": [
                {"operational": 0.9, "downtime": 0.05, "waiting_for_restock": 0.05},
                {"operational": 0.8, "downtime": 0.1, "waiting_for_restock": 0.1}
            ],
            "bottleneck_workstations": {"waiting_times": [3.0, 1.0], "max_waiting_time": 3.0, "bottleneck_station": 0},
            "production_rejection_percentage": 16.6
        }]"#;

        let dataset = deserialize_dataset_from_json_str(json).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.bottleneck_workstations.as_ref().unwrap().bottleneck_station, 0);
        assert_eq!(record.workstation_status.as_ref().unwrap()[1].downtime, 0.1);
    }

    #[test]
    fn rejects_out_of_range_bottleneck_station() {
        let json = days_json(1).replace(
            r#""max_waiting_time":3.5"#,
            r#""max_waiting_time":3.5,"bottleneck_station":7"#,
        );

        let error = deserialize_dataset_from_json_str(&json).unwrap_err();
        assert!(matches!(
            error,
            LoadError::BottleneckStationOutOfRange { day: 0, station: 7, workstations: 3 }
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let error = deserialize_dataset_from_json_str("[{\"accepted_products\": ").unwrap_err();
        assert!(matches!(error, LoadError::Parse(_)));
    }

    #[test]
    fn rejects_empty_array() {
        let error = deserialize_dataset_from_json_str("[]").unwrap_err();
        assert!(matches!(error, LoadError::Dataset(DatasetError::Empty)));
    }

    #[test]
    fn reports_missing_file() {
        let error = load_dataset_from_json_file("does/not/exist.json").unwrap_err();
        assert!(matches!(error, LoadError::Read { .. }));
    }
}
