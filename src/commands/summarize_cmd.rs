use crate::commands::base_commands::Commands;
use crate::commands::command_context::{write_yaml, CommandContext, Report};
use crate::commands::command_error::CommandError;
use crate::commands::report_format::{format_distribution_report, format_period_report};
use crate::services::dashboard::build_dashboard_view;
use crate::services::distribution::MetricField;
use crate::services::windowing::total_instances;

pub async fn summarize_command(cmd: Commands, context: &CommandContext) -> Result<(), CommandError> {
    if let Commands::Summarize {
        period,
        instance,
        output,
    } = cmd
    {
        let period = period.unwrap_or(context.config.default_period);
        let (data_path, dataset) = context.load_dataset()?;
        let instance = instance.unwrap_or_else(|| total_instances(dataset.len(), period).saturating_sub(1));

        let view = build_dashboard_view(&dataset, period, instance)?;
        println!("{}", format_period_report(&view.summary));
        println!();
        println!(
            "{}",
            format_distribution_report(
                MetricField::ProductionRejectionPercentage,
                &view.rejection_distribution
            )
        );

        if let Some(output) = output {
            write_yaml(&output, &Report::new(&data_path, view)).await?;
            println!("Period report written to {output}");
        }
    }
    Ok(())
}
