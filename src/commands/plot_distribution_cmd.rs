use crate::commands::base_commands::Commands;
use crate::commands::command_context::CommandContext;
use crate::commands::command_error::CommandError;
use crate::services::box_plot::write_box_plot_png;
use crate::services::distribution::{metric_series, summarize_distribution};

pub async fn plot_distribution_command(
    cmd: Commands,
    context: &CommandContext,
) -> Result<(), CommandError> {
    if let Commands::PlotDistribution { metric, output } = cmd {
        let (_, dataset) = context.load_dataset()?;
        let summary = summarize_distribution(&metric_series(dataset.records(), metric))?;
        write_box_plot_png(&output, &summary, metric.title()).await?;
        println!("Distribution plot written to {output}");
    }
    Ok(())
}
