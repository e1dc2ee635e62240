use serde::Serialize;
use thiserror::Error;

use crate::domain::dataset::SimulationDataset;

#[derive(Error, Debug, PartialEq)]
pub enum BottleneckError {
    #[error("waiting time vector is empty")]
    EmptyWaitingTimes,
    #[error("dataset has no {0} data")]
    MissingField(&'static str),
}

/// Index of the largest waiting time. Ties resolve to the lowest index.
pub fn bottleneck_station(waiting_times: &[f64]) -> Result<usize, BottleneckError> {
    let mut best: Option<(usize, f64)> = None;
    for (index, value) in waiting_times.iter().copied().enumerate() {
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
        .ok_or(BottleneckError::EmptyWaitingTimes)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BottleneckOverview {
    /// How many days each workstation was that day's bottleneck.
    pub frequency: Vec<usize>,
    /// Per-workstation mean waiting time over all days.
    pub average_waiting_times: Vec<f64>,
}

pub fn bottleneck_frequency(dataset: &SimulationDataset) -> Result<Vec<usize>, BottleneckError> {
    require_bottleneck_data(dataset)?;
    let mut frequency = vec![0usize; dataset.workstation_count()];
    for report in dataset
        .records()
        .iter()
        .filter_map(|record| record.bottleneck_workstations.as_ref())
    {
        if let Some(count) = frequency.get_mut(report.bottleneck_station) {
            *count += 1;
        }
    }
    Ok(frequency)
}

pub fn average_waiting_times(dataset: &SimulationDataset) -> Result<Vec<f64>, BottleneckError> {
    require_bottleneck_data(dataset)?;
    let mut sums = vec![0.0_f64; dataset.workstation_count()];
    for report in dataset
        .records()
        .iter()
        .filter_map(|record| record.bottleneck_workstations.as_ref())
    {
        for (sum, value) in sums.iter_mut().zip(&report.waiting_times) {
            *sum += value;
        }
    }
    let days = dataset.len() as f64;
    Ok(sums.into_iter().map(|sum| sum / days).collect())
}

pub fn bottleneck_overview(dataset: &SimulationDataset) -> Result<BottleneckOverview, BottleneckError> {
    Ok(BottleneckOverview {
        frequency: bottleneck_frequency(dataset)?,
        average_waiting_times: average_waiting_times(dataset)?,
    })
}

fn require_bottleneck_data(dataset: &SimulationDataset) -> Result<(), BottleneckError> {
    if dataset.presence().bottleneck_workstations {
        Ok(())
    } else {
        Err(BottleneckError::MissingField("bottleneck_workstations"))
    }
}
