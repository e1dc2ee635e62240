use std::future::Future;
use std::io;
use std::ops::ControlFlow;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{error, info, warn};

use crate::commands::base_commands::Commands;
use crate::commands::command_context::CommandContext;
use crate::commands::command_error::CommandError;
use crate::commands::report_format::format_period_report;
use crate::domain::dataset::SimulationDataset;
use crate::services::aggregation::{aggregate_instance, AggregationError};
use crate::services::playback::{start_playback, PlayHandle, PlaybackState};

pub async fn play_command(cmd: Commands, context: &CommandContext) -> Result<(), CommandError> {
    if let Commands::Play {
        period,
        interval_ms,
        ticks,
    } = cmd
    {
        let period = period.unwrap_or(context.config.default_period);
        let interval = interval_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| context.config.play_interval());
        if interval.is_zero() {
            return Err(CommandError::InvalidInterval);
        }

        let (_, dataset) = context.load_dataset()?;
        let state = PlaybackState::new(period, dataset.len())?;
        print_window(&dataset, &state)?;
        if ticks == Some(0) {
            return Ok(());
        }

        let failure: Arc<Mutex<Option<AggregationError>>> = Arc::new(Mutex::new(None));
        let tick_failure = Arc::clone(&failure);
        let mut played = 0usize;
        info!(%period, ?interval, ?ticks, "starting playback");
        let mut handle = start_playback(state, interval, move |state| {
            if let Err(e) = print_window(&dataset, state) {
                error!(error = %e, "playback stopped");
                if let Ok(mut slot) = tick_failure.lock() {
                    *slot = Some(e);
                }
                return ControlFlow::Break(());
            }
            played += 1;
            match ticks {
                Some(limit) if played >= limit => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            }
        });

        let final_state = wait_for_playback(&mut handle, tokio::signal::ctrl_c()).await;

        let failed = failure.lock().ok().and_then(|mut slot| slot.take());
        if let Some(e) = failed {
            return Err(e.into());
        }
        if let Some(state) = final_state {
            println!(
                "Playback stopped at {} {} of {}",
                state.period(),
                state.instance() + 1,
                state.total_instances()
            );
        }
    }
    Ok(())
}

/// Waits for playback to end on its own or until `interrupt` fires.
///
/// If the interrupt cannot be listened for, playback keeps running.
async fn wait_for_playback<F>(handle: &mut PlayHandle, interrupt: F) -> Option<PlaybackState>
where
    F: Future<Output = io::Result<()>>,
{
    let outcome = tokio::select! {
        state = handle.finished() => Ok(state),
        signal = interrupt => Err(signal),
    };
    match outcome {
        Ok(state) => state,
        Err(Ok(())) => handle.stop_and_wait().await,
        Err(Err(e)) => {
            warn!(error = %e, "failed to listen for Ctrl-C, playing until the tick limit");
            handle.finished().await
        }
    }
}

fn print_window(dataset: &SimulationDataset, state: &PlaybackState) -> Result<(), AggregationError> {
    let summary = aggregate_instance(dataset, state.period(), state.instance())?;
    println!("{}", format_period_report(&summary));
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::period::PeriodKind;

    fn counting_playback(limit: usize) -> (PlayHandle, Arc<Mutex<usize>>) {
        let ticks = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&ticks);
        let state = PlaybackState::new(PeriodKind::Day, 5).unwrap();
        let handle = start_playback(state, Duration::from_millis(100), move |_| {
            let mut count = counter.lock().unwrap();
            *count += 1;
            if *count >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        (handle, ticks)
    }

    #[tokio::test(start_paused = true)]
    async fn failed_interrupt_listener_keeps_playing() {
        let (mut handle, ticks) = counting_playback(3);

        let interrupt = std::future::ready(Err(io::Error::other("no signal handler")));
        let final_state = wait_for_playback(&mut handle, interrupt).await.unwrap();

        assert_eq!(*ticks.lock().unwrap(), 3);
        assert_eq!(final_state.instance(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn interrupt_stops_playback() {
        let (mut handle, ticks) = counting_playback(10);

        let interrupt = async {
            tokio::time::sleep(Duration::from_millis(250)).await;
            Ok(())
        };
        let final_state = wait_for_playback(&mut handle, interrupt).await.unwrap();

        assert_eq!(*ticks.lock().unwrap(), 2);
        assert_eq!(final_state.instance(), 1);
    }
}
