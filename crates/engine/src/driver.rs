//! Single-threaded fold loop over the merged action channel.

use anyhow::Result;
use log::{debug, info, trace};
use tokio::sync::mpsc;

use crate::core::GameState;
use crate::types::Action;

/// Message delivered to the fold loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Action(Action),
    /// Stop the loop and return the final state
    Shutdown,
}

impl From<Action> for Event {
    fn from(action: Action) -> Self {
        Event::Action(action)
    }
}

/// Receives every state the driver produces.
///
/// An error from `render` stops the driver and is returned to its caller.
pub trait StateSink {
    fn render(&mut self, state: &GameState) -> Result<()>;
}

impl<F> StateSink for F
where
    F: FnMut(&GameState) -> Result<()>,
{
    fn render(&mut self, state: &GameState) -> Result<()> {
        self(state)
    }
}

/// Fold a finite sequence of actions, rendering after each one.
///
/// Rejected actions still render (the unchanged state).
pub fn fold<I, S>(state: GameState, actions: I, sink: &mut S) -> Result<GameState>
where
    I: IntoIterator<Item = Action>,
    S: StateSink + ?Sized,
{
    let mut driver = Driver::new(state);
    for action in actions {
        driver.apply(action);
        sink.render(driver.state())?;
    }
    Ok(driver.into_state())
}

/// Owns the authoritative state between actions.
#[derive(Debug, Clone)]
pub struct Driver {
    state: GameState,
    applied: u64,
    rejected: u64,
}

impl Driver {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            applied: 0,
            rejected: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Number of accepted actions so far
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Number of rejected actions so far
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Apply one action; returns whether it was accepted.
    pub fn apply(&mut self, action: Action) -> bool {
        match self.state.apply_action(action) {
            Some(next) => {
                if next.game_end() && !self.state.game_end() {
                    info!(
                        "game over: score={} high_score={}",
                        next.score(),
                        next.high_score()
                    );
                }
                self.state = next;
                self.applied += 1;
                true
            }
            None => {
                trace!("rejected {}", action.as_str());
                self.rejected += 1;
                false
            }
        }
    }

    /// Drain `rx` until `Shutdown` arrives or every sender is gone.
    ///
    /// The initial state is rendered once before any event, then once per
    /// processed action.
    pub async fn run<S>(mut self, mut rx: mpsc::Receiver<Event>, sink: &mut S) -> Result<GameState>
    where
        S: StateSink + ?Sized,
    {
        sink.render(&self.state)?;

        while let Some(event) = rx.recv().await {
            match event {
                Event::Action(action) => {
                    self.apply(action);
                    sink.render(&self.state)?;
                }
                Event::Shutdown => {
                    debug!("shutdown requested");
                    break;
                }
            }
        }

        info!(
            "driver stopped: {} applied, {} rejected",
            self.applied, self.rejected
        );
        Ok(self.state)
    }
}
