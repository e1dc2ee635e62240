use crate::domain::daily_record::{BottleneckReport, DailyRecord, WorkstationStatus};
use crate::services::bottleneck::bottleneck_station;

pub fn build_day(accepted: u64, rejected: u64, occupancy: &[f64]) -> DailyRecord {
    let total = accepted as f64 + rejected as f64;
    let rejection_percentage = if total == 0.0 {
        0.0
    } else {
        rejected as f64 / total * 100.0
    };
    DailyRecord {
        accepted_products: accepted,
        rejected_products: rejected,
        occupancy_per_workstation: occupancy.to_vec(),
        avg_production_time: vec![4.0; occupancy.len()],
        avg_delay_time: 1.0,
        accident_rate: 0.0,
        supplier_occupancy: 0.5,
        avg_fix_time: 3.0,
        avg_bottleneck_delay: 2.0,
        faulty_product_rate: rejection_percentage / 100.0,
        accidents: 0,
        workstation_status: None,
        bottleneck_workstations: None,
        production_rejection_percentage: rejection_percentage,
    }
}

pub fn with_status(mut record: DailyRecord) -> DailyRecord {
    record.workstation_status = Some(
        record
            .occupancy_per_workstation
            .iter()
            .map(|occupancy| WorkstationStatus {
                operational: *occupancy,
                downtime: 1.0 - occupancy,
                waiting_for_restock: 0.0,
            })
            .collect(),
    );
    record
}

pub fn with_bottleneck(mut record: DailyRecord, waiting_times: &[f64], max_waiting_time: f64) -> DailyRecord {
    record.bottleneck_workstations = Some(BottleneckReport {
        waiting_times: waiting_times.to_vec(),
        max_waiting_time,
        bottleneck_station: bottleneck_station(waiting_times).unwrap_or(0),
    });
    record
}

pub fn days_json(count: usize) -> String {
    let days: Vec<serde_json::Value> = (0..count)
        .map(|day| {
            serde_json::json!({
                "accepted_products": 90 + day,
                "rejected_products": 10,
                "occupancy_per_workstation": [0.5, 0.75, 0.25],
                "avg_production_time": [4.0, 5.0, 6.0],
                "avg_delay_time": 1.5,
                "accident_rate": 0.0,
                "supplier_occupancy": 0.4,
                "avg_fix_time": 2.5,
                "avg_bottleneck_delay": 0.8,
                "faulty_product_rate": 0.1,
                "accidents": 0,
                "bottleneck_workstations": {
                    "waiting_times": [1.0, 3.0, 2.0],
                    "max_waiting_time": 3.5
                },
                "production_rejection_percentage": 10.0
            })
        })
        .collect();
    serde_json::Value::Array(days).to_string()
}
