use serde::Serialize;

use crate::commands::base_commands::Commands;
use crate::commands::command_context::{write_yaml, CommandContext, Report};
use crate::commands::command_error::CommandError;
use crate::commands::report_format::format_distribution_report;
use crate::domain::distribution::DistributionSummary;
use crate::services::distribution::{metric_series, summarize_distribution, MetricField};

#[derive(Serialize)]
struct DistributionReport {
    metric: MetricField,
    summary: DistributionSummary,
}

pub async fn distribution_command(cmd: Commands, context: &CommandContext) -> Result<(), CommandError> {
    if let Commands::Distribution { metric, output } = cmd {
        let (data_path, dataset) = context.load_dataset()?;
        let summary = summarize_distribution(&metric_series(dataset.records(), metric))?;
        println!("{}", format_distribution_report(metric, &summary));

        if let Some(output) = output {
            let report = Report::new(&data_path, DistributionReport { metric, summary });
            write_yaml(&output, &report).await?;
            println!("Distribution summary written to {output}");
        }
    }
    Ok(())
}
