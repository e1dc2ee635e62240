use std::ops::{ControlFlow, Range};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::domain::period::PeriodKind;
use crate::services::windowing::{total_instances, window_range};

#[derive(Error, Debug, PartialEq)]
pub enum PlaybackError {
    #[error("no {0} windows: dataset is empty")]
    NoInstances(PeriodKind),
    #[error("instance {instance} is out of range ({total_instances} available)")]
    InstanceOutOfRange {
        instance: usize,
        total_instances: usize,
    },
}

/// Navigation state of the dashboard: the selected period and the slider position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    period: PeriodKind,
    instance: usize,
    total_instances: usize,
    record_count: usize,
}

impl PlaybackState {
    /// Starts on the latest window of `period`.
    pub fn new(period: PeriodKind, record_count: usize) -> Result<Self, PlaybackError> {
        let total_instances = total_instances(record_count, period);
        if total_instances == 0 {
            return Err(PlaybackError::NoInstances(period));
        }
        Ok(Self {
            period,
            instance: total_instances - 1,
            total_instances,
            record_count,
        })
    }

    pub fn period(&self) -> PeriodKind {
        self.period
    }

    pub fn instance(&self) -> usize {
        self.instance
    }

    pub fn total_instances(&self) -> usize {
        self.total_instances
    }

    /// Switches period and jumps to its latest window.
    pub fn set_period(&mut self, period: PeriodKind) -> Result<(), PlaybackError> {
        *self = Self::new(period, self.record_count)?;
        Ok(())
    }

    pub fn select(&mut self, instance: usize) -> Result<(), PlaybackError> {
        if instance >= self.total_instances {
            return Err(PlaybackError::InstanceOutOfRange {
                instance,
                total_instances: self.total_instances,
            });
        }
        self.instance = instance;
        Ok(())
    }

    /// Moves to the next window, wrapping from the last back to the first.
    pub fn advance(&mut self) -> usize {
        self.instance = if self.instance + 1 < self.total_instances {
            self.instance + 1
        } else {
            0
        };
        self.instance
    }

    pub fn window(&self) -> Range<usize> {
        window_range(self.record_count, self.period, self.instance).unwrap_or(0..0)
    }
}

/// Handle to a running play loop.
///
/// Dropping the handle stops the loop.
pub struct PlayHandle {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<PlaybackState>>,
}

impl PlayHandle {
    /// Requests the loop to stop. Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Waits for the loop to end and returns its final state.
    ///
    /// Returns `None` if the loop was already awaited or did not finish cleanly.
    pub async fn finished(&mut self) -> Option<PlaybackState> {
        let task = self.task.as_mut()?;
        let result = task.await;
        self.task = None;
        self.stop = None;
        result.ok()
    }

    pub async fn stop_and_wait(&mut self) -> Option<PlaybackState> {
        self.stop();
        self.finished().await
    }
}

impl Drop for PlayHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Advances `state` every `period` and hands it to `on_tick`.
///
/// The first tick fires one full interval after the start. The loop ends when
/// `on_tick` breaks or the handle is stopped.
pub fn start_playback<F>(mut state: PlaybackState, period: Duration, mut on_tick: F) -> PlayHandle
where
    F: FnMut(&PlaybackState) -> ControlFlow<()> + Send + 'static,
{
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = &mut stop_rx => break,
                _ = ticker.tick() => {
                    let instance = state.advance();
                    debug!(period = %state.period(), instance, "play tick");
                    if on_tick(&state).is_break() {
                        break;
                    }
                }
            }
        }
        state
    });

    PlayHandle {
        stop: Some(stop_tx),
        task: Some(task),
    }
}
