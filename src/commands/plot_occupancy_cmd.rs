use crate::commands::base_commands::Commands;
use crate::commands::command_context::CommandContext;
use crate::commands::command_error::CommandError;
use crate::services::aggregation::{aggregate_instance, aggregate_latest};
use crate::services::occupancy_plot::write_occupancy_png;

pub async fn plot_occupancy_command(cmd: Commands, context: &CommandContext) -> Result<(), CommandError> {
    if let Commands::PlotOccupancy {
        period,
        instance,
        output,
    } = cmd
    {
        let period = period.unwrap_or(context.config.default_period);
        let (_, dataset) = context.load_dataset()?;
        let summary = match instance {
            Some(instance) => aggregate_instance(&dataset, period, instance)?,
            None => aggregate_latest(&dataset, period)?,
        };
        write_occupancy_png(&output, &summary).await?;
        println!("Occupancy plot written to {output}");
    }
    Ok(())
}
