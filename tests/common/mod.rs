#![allow(dead_code)]

use assert_fs::prelude::*;

/// Ten days over three workstations. Day 9 has an unusually high rejection rate.
pub fn results_json() -> String {
    let days: Vec<String> = (0..10)
        .map(|day| {
            let (accepted, rejected, percentage) = if day == 9 { (60, 40, 40.0) } else { (90, 10, 10.0) };
            format!(
                r#"{{
  "accepted_products": {accepted},
  "rejected_products": {rejected},
  "occupancy_per_workstation": [0.5, 0.75, 0.25],
  "avg_production_time": [4.0, 5.0, 6.0],
  "avg_delay_time": {delay},
  "accident_rate": 0.0,
  "supplier_occupancy": 0.4,
  "avg_fix_time": 2.5,
  "avg_bottleneck_delay": 0.8,
  "faulty_product_rate": {faulty},
  "accidents": 0,
  "workstation_status": [
    {{"operational": 0.5, "downtime": 0.5, "waiting_for_restock": 0.0}},
    {{"operational": 0.75, "downtime": 0.25, "waiting_for_restock": 0.0}},
    {{"operational": 0.25, "downtime": 0.75, "waiting_for_restock": 0.0}}
  ],
  "bottleneck_workstations": {{
    "waiting_times": [1.0, 3.0, 2.0],
    "max_waiting_time": 3.5,
    "bottleneck_station": 1
  }},
  "production_rejection_percentage": {percentage:.1}
}}"#,
                delay = 1.0 + day as f64 * 0.5,
                faulty = rejected as f64 / 100.0,
            )
        })
        .collect();
    format!("[{}]", days.join(",\n"))
}

pub fn results_file() -> assert_fs::NamedTempFile {
    let input_file = assert_fs::NamedTempFile::new("results.json").unwrap();
    input_file.write_str(&results_json()).unwrap();
    input_file
}

pub fn path_arg(path: &std::path::Path) -> String {
    path.to_str().unwrap().to_string()
}
