use serde::Serialize;

use crate::domain::daily_record::WorkstationStatus;
use crate::domain::period::PeriodKind;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedBottleneck {
    /// Per-workstation mean over the window.
    pub waiting_times: Vec<f64>,
    /// Largest per-day reported maximum in the window.
    pub max_waiting_time: f64,
    /// Index of the largest entry in the averaged `waiting_times`.
    ///
    /// This is not guaranteed to be the station behind `max_waiting_time`.
    pub bottleneck_station: usize,
}

/// Period-level roll-up of a window of daily records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRecord {
    pub accepted_products: u64,
    pub rejected_products: u64,
    pub total_products: u64,
    pub production_rejection_percentage: f64,
    pub occupancy_per_workstation: Vec<f64>,
    pub avg_production_time: Vec<f64>,
    pub avg_delay_time: f64,
    pub accident_rate: f64,
    pub supplier_occupancy: f64,
    pub avg_fix_time: f64,
    pub avg_bottleneck_delay: f64,
    pub faulty_product_rate: f64,
    pub accidents: u64,
    pub workstation_status: Option<Vec<WorkstationStatus>>,
    pub bottleneck_workstations: Option<AggregatedBottleneck>,
}

/// An aggregated window together with where it sits in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub period: PeriodKind,
    pub instance: usize,
    pub total_instances: usize,
    pub first_day: usize,
    pub last_day: usize,
    pub days: usize,
    pub record: AggregatedRecord,
}
