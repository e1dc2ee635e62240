use serde::Serialize;

use crate::commands::base_commands::Commands;
use crate::commands::command_context::{write_yaml, CommandContext, Report};
use crate::commands::command_error::CommandError;
use crate::commands::report_format::format_occupancy_report;
use crate::domain::period::PeriodKind;
use crate::services::occupancy::{occupancy_targets, OccupancyTarget};
use crate::services::playback::PlaybackState;

#[derive(Serialize)]
struct OccupancyReport {
    period: Option<PeriodKind>,
    instance: Option<usize>,
    first_day: usize,
    last_day: usize,
    rows: Vec<OccupancyTarget>,
}

pub async fn occupancy_command(cmd: Commands, context: &CommandContext) -> Result<(), CommandError> {
    if let Commands::Occupancy {
        period,
        instance,
        target,
        output,
    } = cmd
    {
        let target = target.unwrap_or(context.config.occupancy_target);
        if !(0.0..=1.0).contains(&target) {
            return Err(CommandError::InvalidTarget(target));
        }

        let (data_path, dataset) = context.load_dataset()?;
        let (range, instance) = match period {
            Some(period) => {
                let mut state = PlaybackState::new(period, dataset.len())?;
                if let Some(instance) = instance {
                    state.select(instance)?;
                }
                (state.window(), Some(state.instance()))
            }
            None => (0..dataset.len(), None),
        };

        let rows = occupancy_targets(dataset.slice(range.clone()), target)?;
        println!("{}", format_occupancy_report(&rows));

        if let Some(output) = output {
            let report = OccupancyReport {
                period,
                instance,
                first_day: range.start,
                last_day: range.end.saturating_sub(1),
                rows,
            };
            write_yaml(&output, &Report::new(&data_path, report)).await?;
            println!("Occupancy report written to {output}");
        }
    }
    Ok(())
}
