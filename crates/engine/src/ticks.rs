//! Per-level gravity tick sources.
//!
//! Every level gets its own periodic task emitting `Action::Tick(level)`.
//! All of them run all the time; the reducer ignores ticks whose level does
//! not match the current one, so raising the level switches gravity speed
//! without touching the timers.

use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::driver::Event;
use crate::types::{Action, DEFAULT_TICK_PERIODS_MS, STARTING_LEVEL};

/// Gravity period for each level, starting at [`STARTING_LEVEL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSchedule {
    periods: Vec<(u32, Duration)>,
}

impl TickSchedule {
    /// Build from millisecond periods; index 0 drives the starting level.
    ///
    /// Every level gets a source: missing entries fall back to
    /// [`DEFAULT_TICK_PERIODS_MS`] and entries past the last level are
    /// ignored. Zero periods are raised to 1ms.
    pub fn from_millis(periods_ms: &[u64]) -> Self {
        let periods = DEFAULT_TICK_PERIODS_MS
            .iter()
            .enumerate()
            .zip(STARTING_LEVEL..)
            .map(|((i, default), level)| {
                let ms = periods_ms.get(i).unwrap_or(default);
                (level, Duration::from_millis((*ms).max(1)))
            })
            .collect();
        Self { periods }
    }

    pub fn period_for(&self, level: u32) -> Option<Duration> {
        self.periods
            .iter()
            .find(|&&(l, _)| l == level)
            .map(|&(_, period)| period)
    }

    pub fn periods(&self) -> &[(u32, Duration)] {
        &self.periods
    }
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::from_millis(&DEFAULT_TICK_PERIODS_MS)
    }
}

/// Spawn one interval task per level, all feeding `tx`.
///
/// Each task stops once the receiving side is gone. Must be called from inside
/// a tokio runtime.
pub fn spawn_tick_sources(schedule: &TickSchedule, tx: &mpsc::Sender<Event>) -> Vec<JoinHandle<()>> {
    schedule
        .periods()
        .iter()
        .map(|&(level, period)| {
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut interval = time::interval_at(time::Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    interval.tick().await;
                    if tx.send(Event::Action(Action::Tick(level))).await.is_err() {
                        debug!("tick source for level {level} stopped");
                        break;
                    }
                }
            })
        })
        .collect()
}
