use plotters::prelude::*;
use thiserror::Error;

use crate::domain::distribution::DistributionSummary;

#[derive(Error, Debug)]
pub enum BoxPlotError {
    #[error("failed to render box plot: {0}")]
    Render(String),
}

const BOX_COLOR: RGBColor = RGBColor(105, 179, 162);
const CENTER_Y: f64 = 0.5;
const BOX_HALF_HEIGHT: f64 = 0.15;
const CAP_HALF_HEIGHT: f64 = 0.1;

pub async fn write_box_plot_png(
    output_path: &str,
    summary: &DistributionSummary,
    title: &str,
) -> Result<(), BoxPlotError> {
    let output_path = output_path.to_string();
    let summary = summary.clone();
    let title = title.to_string();
    tokio::task::spawn_blocking(move || render_box_plot_png(&output_path, &summary, &title))
        .await
        .map_err(|e| BoxPlotError::Render(e.to_string()))??;
    Ok(())
}

fn render_box_plot_png(
    output_path: &str,
    summary: &DistributionSummary,
    title: &str,
) -> Result<(), BoxPlotError> {
    let (whisker_low, whisker_high) = summary
        .whisker_extent()
        .unwrap_or((summary.min, summary.max));
    let x_min = (summary.min - 1.0).floor();
    let x_max = (summary.max + 1.0).ceil();

    let root = BitMapBackend::new(output_path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| BoxPlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(format!("{title} Distribution"), ("sans-serif", 26))
        .x_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, 0.0..1.0)
        .map_err(|e| BoxPlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_y_axis()
        .x_desc(title)
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_label_formatter(&|value| format!("{value:.1}"))
        .draw()
        .map_err(|e| BoxPlotError::Render(e.to_string()))?;

    let line_style = BLACK.stroke_width(1);
    let mut lines = vec![vec![(whisker_low, CENTER_Y), (whisker_high, CENTER_Y)]];
    for cap in [whisker_low, whisker_high] {
        lines.push(vec![
            (cap, CENTER_Y - CAP_HALF_HEIGHT),
            (cap, CENTER_Y + CAP_HALF_HEIGHT),
        ]);
    }
    chart
        .draw_series(lines.into_iter().map(|points| PathElement::new(points, line_style.clone())))
        .map_err(|e| BoxPlotError::Render(e.to_string()))?;

    let box_corners = [
        (summary.q1, CENTER_Y - BOX_HALF_HEIGHT),
        (summary.q3, CENTER_Y + BOX_HALF_HEIGHT),
    ];
    chart
        .draw_series([
            Rectangle::new(box_corners, BOX_COLOR.filled()),
            Rectangle::new(box_corners, line_style.clone()),
        ])
        .map_err(|e| BoxPlotError::Render(e.to_string()))?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![
                (summary.median, CENTER_Y - BOX_HALF_HEIGHT),
                (summary.median, CENTER_Y + BOX_HALF_HEIGHT),
            ],
            BLACK.stroke_width(2),
        )))
        .map_err(|e| BoxPlotError::Render(e.to_string()))?;

    chart
        .draw_series(
            summary
                .outliers
                .iter()
                .map(|value| Circle::new((*value, CENTER_Y), 4, BOX_COLOR.mix(0.8).filled())),
        )
        .map_err(|e| BoxPlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| BoxPlotError::Render(e.to_string()))?;
    Ok(())
}
