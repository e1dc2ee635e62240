use serde::Serialize;

/// Share of a day a workstation spent in each state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WorkstationStatus {
    pub operational: f64,
    pub downtime: f64,
    pub waiting_for_restock: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BottleneckReport {
    pub waiting_times: Vec<f64>,
    pub max_waiting_time: f64,
    pub bottleneck_station: usize,
}

/// One simulated day of factory metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub accepted_products: u64,
    pub rejected_products: u64,
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
    pub bottleneck_workstations: Option<BottleneckReport>,
    pub production_rejection_percentage: f64,
}

impl DailyRecord {
    pub fn workstation_count(&self) -> usize {
        self.occupancy_per_workstation.len()
    }
}
