use crate::commands::base_commands::Commands;
use crate::commands::command_context::{write_yaml, CommandContext, Report};
use crate::commands::command_error::CommandError;
use crate::commands::report_format::format_bottleneck_report;
use crate::services::bottleneck::bottleneck_overview;

pub async fn bottlenecks_command(cmd: Commands, context: &CommandContext) -> Result<(), CommandError> {
    if let Commands::Bottlenecks { output } = cmd {
        let (data_path, dataset) = context.load_dataset()?;
        let overview = bottleneck_overview(&dataset)?;
        println!("{}", format_bottleneck_report(&overview));

        if let Some(output) = output {
            write_yaml(&output, &Report::new(&data_path, overview)).await?;
            println!("Bottleneck report written to {output}");
        }
    }
    Ok(())
}
