use clap::Parser;
use tracing::error;

use simdash::commands::base_commands::{CliArgs, Commands};
use simdash::commands::bottlenecks_cmd::bottlenecks_command;
use simdash::commands::command_context::CommandContext;
use simdash::commands::command_error::CommandError;
use simdash::commands::completions_cmd::completions_command;
use simdash::commands::correlation_cmd::correlation_command;
use simdash::commands::distribution_cmd::distribution_command;
use simdash::commands::occupancy_cmd::occupancy_command;
use simdash::commands::play_cmd::play_command;
use simdash::commands::plot_distribution_cmd::plot_distribution_command;
use simdash::commands::plot_occupancy_cmd::plot_occupancy_command;
use simdash::commands::summarize_cmd::summarize_command;
use simdash::logging::init_logging;

#[tokio::main]
async fn main() {
    let CliArgs {
        input,
        config,
        verbose,
        command,
    } = CliArgs::parse();
    init_logging(verbose);

    if let Err(e) = run(input, config, command).await {
        error!(error = ?e, "command failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(input: Option<String>, config: Option<String>, command: Commands) -> Result<(), CommandError> {
    if let Commands::Completions { .. } = command {
        completions_command(command);
        return Ok(());
    }

    let context = CommandContext::new(input, config.as_deref())?;
    match command {
        Commands::Summarize { .. } => summarize_command(command, &context).await,
        Commands::Distribution { .. } => distribution_command(command, &context).await,
        Commands::Bottlenecks { .. } => bottlenecks_command(command, &context).await,
        Commands::Occupancy { .. } => occupancy_command(command, &context).await,
        Commands::Correlation { .. } => correlation_command(command, &context).await,
        Commands::Play { .. } => play_command(command, &context).await,
        Commands::PlotDistribution { .. } => plot_distribution_command(command, &context).await,
        Commands::PlotOccupancy { .. } => plot_occupancy_command(command, &context).await,
        Commands::Completions { .. } => Ok(()),
    }
}
