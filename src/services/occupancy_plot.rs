use plotters::prelude::*;
use thiserror::Error;

use crate::domain::aggregated_record::PeriodSummary;

#[derive(Error, Debug)]
pub enum OccupancyPlotError {
    #[error("summary has no workstations to plot")]
    NoWorkstations,
    #[error("failed to render occupancy plot: {0}")]
    Plot(String),
}

pub async fn write_occupancy_png(
    output_path: &str,
    summary: &PeriodSummary,
) -> Result<(), OccupancyPlotError> {
    if summary.record.occupancy_per_workstation.is_empty() {
        return Err(OccupancyPlotError::NoWorkstations);
    }
    let output_path = output_path.to_string();
    let summary = summary.clone();
    tokio::task::spawn_blocking(move || render_occupancy_png(&output_path, &summary))
        .await
        .map_err(|e| OccupancyPlotError::Plot(e.to_string()))??;
    Ok(())
}

fn render_occupancy_png(
    output_path: &str,
    summary: &PeriodSummary,
) -> Result<(), OccupancyPlotError> {
    let occupancy: Vec<f64> = summary
        .record
        .occupancy_per_workstation
        .iter()
        .map(|value| value * 100.0)
        .collect();
    let max_y = occupancy.iter().copied().fold(0.0_f64, f64::max).max(100.0);
    let max_x = occupancy.len() as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| OccupancyPlotError::Plot(e.to_string()))?;

    let caption = format!(
        "Workstation Occupancy ({} {} of {})",
        summary.period,
        summary.instance + 1,
        summary.total_instances
    );
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| OccupancyPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Workstation")
        .y_desc("Occupancy (%)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(occupancy.len().max(1))
        .x_label_formatter(&|index| {
            if *index < 0 || *index >= max_x {
                return String::new();
            }
            format!("W{}", index + 1)
        })
        .y_label_formatter(&|value| format!("{value:.0}%"))
        .draw()
        .map_err(|e| OccupancyPlotError::Plot(e.to_string()))?;

    let bar_color = RGBColor(96, 165, 250);
    let bar_style = ShapeStyle::from(&bar_color).filled().stroke_width(1);
    chart
        .draw_series(occupancy.iter().enumerate().map(|(idx, value)| {
            Rectangle::new([(idx as i32, 0.0), (idx as i32 + 1, *value)], bar_style.clone())
        }))
        .map_err(|e| OccupancyPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| OccupancyPlotError::Plot(e.to_string()))?;
    Ok(())
}
