use crate::commands::base_commands::Commands;
use crate::commands::command_context::{write_yaml, CommandContext, Report};
use crate::commands::command_error::CommandError;
use crate::services::correlation::correlation_series;

pub async fn correlation_command(cmd: Commands, context: &CommandContext) -> Result<(), CommandError> {
    if let Commands::Correlation {
        kind,
        station,
        output,
    } = cmd
    {
        let (data_path, dataset) = context.load_dataset()?;
        let series = correlation_series(dataset.records(), kind, station)?;
        let points = series.points.len();
        write_yaml(&output, &Report::new(&data_path, series)).await?;
        println!("Correlation series with {points} points written to {output}");
    }
    Ok(())
}
