use crate::domain::aggregated_record::PeriodSummary;
use crate::domain::distribution::DistributionSummary;
use crate::services::bottleneck::BottleneckOverview;
use crate::services::distribution::MetricField;
use crate::services::occupancy::OccupancyTarget;

const NOT_AVAILABLE: &str = "N/A";

pub fn workstation_label(index: usize) -> String {
    format!("W{}", index + 1)
}

/// Renders the dashboard cards for one aggregated window.
pub fn format_period_report(summary: &PeriodSummary) -> String {
    let record = &summary.record;
    let avg_occupancy = mean(&record.occupancy_per_workstation).map(|value| value * 100.0);
    let avg_production_time = mean(&record.avg_production_time);

    let mut lines = Vec::new();
    lines.push("Period Report".to_string());
    lines.push(format!(
        "Period: {} {} of {} (days {}-{})",
        summary.period,
        summary.instance + 1,
        summary.total_instances,
        summary.first_day,
        summary.last_day
    ));
    lines.push(format!("Days aggregated: {}", summary.days));
    lines.push(String::new());
    lines.push(format!(
        "Accepted: {} | Rejected: {}",
        record.accepted_products, record.rejected_products
    ));
    lines.push(format!(
        "Rejection %: {}",
        format_percent(Some(record.production_rejection_percentage))
    ));
    lines.push(format!("Avg Occupancy: {}", format_percent(avg_occupancy)));
    lines.push(format!(
        "Average Time: {}",
        avg_production_time
            .filter(|value| value.is_finite())
            .map(|value| format!("{value:.2} s"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    ));
    lines.push(format!(
        "Avg Delay: {} | Accidents: {}",
        format_number(Some(record.avg_delay_time)),
        record.accidents
    ));
    lines.push(format!(
        "Accident Rate: {}",
        format_percent(Some(record.accident_rate))
    ));
    lines.push(match &record.bottleneck_workstations {
        Some(bottleneck) => format!(
            "Bottleneck: {} | Max waiting: {:.2}",
            workstation_label(bottleneck.bottleneck_station),
            bottleneck.max_waiting_time
        ),
        None => format!("Bottleneck: {NOT_AVAILABLE}"),
    });

    lines.join("\n")
}

pub fn format_distribution_report(metric: MetricField, summary: &DistributionSummary) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{} Distribution", metric.title()));
    lines.push(format!("Min: {:.2} | Max: {:.2}", summary.min, summary.max));
    lines.push(format!(
        "Q1: {:.2} | Median: {:.2} | Q3: {:.2}",
        summary.q1, summary.median, summary.q3
    ));
    lines.push(format!("IQR: {:.2}", summary.iqr));
    lines.push(format!(
        "Fences: {:.2} .. {:.2}",
        summary.lower_whisker, summary.upper_whisker
    ));
    lines.push(format!(
        "Outliers: {} of {}",
        summary.outliers.len(),
        summary.outliers.len() + summary.non_outliers.len()
    ));
    lines.join("\n")
}

pub fn format_bottleneck_report(overview: &BottleneckOverview) -> String {
    let mut lines = Vec::new();
    lines.push("Bottleneck Report".to_string());
    lines.push("Workstation | Days as bottleneck | Avg waiting".to_string());
    lines.push("------------|--------------------|------------".to_string());
    for (index, (count, waiting)) in overview
        .frequency
        .iter()
        .zip(&overview.average_waiting_times)
        .enumerate()
    {
        lines.push(format!("{} | {count} | {waiting:.2}", workstation_label(index)));
    }
    lines.join("\n")
}

pub fn format_occupancy_report(rows: &[OccupancyTarget]) -> String {
    let mut lines = Vec::new();
    lines.push("Occupancy vs Target".to_string());
    lines.push("Workstation | Avg | Target | Status".to_string());
    lines.push("------------|-----|--------|-------".to_string());
    for row in rows {
        lines.push(format!(
            "{} | {:.1}% | {:.0}% | {}",
            workstation_label(row.workstation),
            row.measure * 100.0,
            row.target * 100.0,
            if row.meets_target { "ok" } else { "below" }
        ));
    }
    lines.join("\n")
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn format_number(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{value:.2}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{value:.2}%"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregated_record::{AggregatedBottleneck, AggregatedRecord};
    use crate::domain::period::PeriodKind;
    use crate::services::occupancy::OccupancyBand;

    fn build_summary() -> PeriodSummary {
        PeriodSummary {
            period: PeriodKind::Week,
            instance: 1,
            total_instances: 2,
            first_day: 7,
            last_day: 9,
            days: 3,
            record: AggregatedRecord {
                accepted_products: 275,
                rejected_products: 25,
                total_products: 300,
                production_rejection_percentage: 25.0 / 300.0 * 100.0,
                occupancy_per_workstation: vec![0.5, 0.25],
                avg_production_time: vec![4.0, 5.0],
                avg_delay_time: 1.5,
                accident_rate: 0.25,
                supplier_occupancy: 0.4,
                avg_fix_time: 2.0,
                avg_bottleneck_delay: 0.5,
                faulty_product_rate: 0.08,
                accidents: 2,
                workstation_status: None,
                bottleneck_workstations: Some(AggregatedBottleneck {
                    waiting_times: vec![1.0, 3.0],
                    max_waiting_time: 3.5,
                    bottleneck_station: 1,
                }),
            },
        }
    }

    #[test]
    fn format_period_report_includes_cards() {
        let output = format_period_report(&build_summary());

        assert!(output.contains("Period Report"));
        assert!(output.contains("Period: week 2 of 2 (days 7-9)"));
        assert!(output.contains("Days aggregated: 3"));
        assert!(output.contains("Accepted: 275 | Rejected: 25"));
        assert!(output.contains("Rejection %: 8.33%"));
        assert!(output.contains("Avg Occupancy: 37.50%"));
        assert!(output.contains("Average Time: 4.50 s"));
        assert!(output.contains("Avg Delay: 1.50 | Accidents: 2"));
        assert!(output.contains("Accident Rate: 0.25%"));
        assert!(output.contains("Bottleneck: W2 | Max waiting: 3.50"));
    }

    #[test]
    fn format_period_report_uses_na_for_missing_values() {
        let mut summary = build_summary();
        summary.record.bottleneck_workstations = None;
        summary.record.occupancy_per_workstation = vec![];
        summary.record.avg_production_time = vec![];

        let output = format_period_report(&summary);
        assert!(output.contains("Bottleneck: N/A"));
        assert!(output.contains("Avg Occupancy: N/A"));
        assert!(output.contains("Average Time: N/A"));
    }

    #[test]
    fn format_distribution_report_lists_quartiles() {
        let summary = DistributionSummary {
            q1: 2.0,
            median: 3.0,
            q3: 4.5,
            iqr: 2.5,
            lower_whisker: -1.75,
            upper_whisker: 8.25,
            min: 1.0,
            max: 100.0,
            outliers: vec![100.0],
            non_outliers: vec![1.0, 2.0, 2.0, 3.0, 4.0, 5.0],
        };

        let output = format_distribution_report(MetricField::ProductionRejectionPercentage, &summary);
        assert!(output.contains("Production Rejection % Distribution"));
        assert!(output.contains("Q1: 2.00 | Median: 3.00 | Q3: 4.50"));
        assert!(output.contains("Fences: -1.75 .. 8.25"));
        assert!(output.contains("Outliers: 1 of 7"));
    }

    #[test]
    fn format_bottleneck_report_has_row_per_workstation() {
        let overview = BottleneckOverview {
            frequency: vec![3, 0],
            average_waiting_times: vec![2.5, 1.0],
        };

        let output = format_bottleneck_report(&overview);
        assert!(output.contains("W1 | 3 | 2.50"));
        assert!(output.contains("W2 | 0 | 1.00"));
    }

    #[test]
    fn format_occupancy_report_marks_rows_below_target() {
        let rows = vec![OccupancyTarget {
            workstation: 2,
            measure: 0.5,
            target: 0.95,
            meets_target: false,
            band: OccupancyBand::Low,
        }];

        let output = format_occupancy_report(&rows);
        assert!(output.contains("W3 | 50.0% | 95% | below"));
    }
}
