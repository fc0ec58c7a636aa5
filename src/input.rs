//! Direction input policy
//!
//! Raw key events are the platform's business; this decides which requested
//! directions are allowed to reach the simulation.

use serde::{Deserialize, Serialize};

use crate::sim::Direction;

/// Accept `requested` unless it is the exact reverse of `current`.
///
/// The body shifts one cell per tick, so turning back on the spot always
/// lands on the neck.
pub fn propose(requested: Direction, current: Direction) -> Direction {
    if current.is_moving() && requested == current.opposite() {
        current
    } else {
        requested
    }
}

/// What happened to a direction request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputOutcome {
    /// First valid direction; the session starts moving
    Started(Direction),
    /// Heading changed (or repeated) while running
    Accepted(Direction),
    /// Reversal attempt, dropped silently
    IgnoredReversal,
    /// Nothing to do (standing direction requested)
    Ignored,
}

/// Holds the heading the next tick will use.
///
/// Requests are checked against the direction the last tick actually moved
/// in, so two quick turns between ticks cannot add up to a reversal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputRouter {
    pending: Direction,
    committed: Direction,
    started: bool,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading for the next tick (also the orientation to draw)
    pub fn current(&self) -> Direction {
        self.pending
    }

    /// Direction the most recent tick moved in
    pub fn committed(&self) -> Direction {
        self.committed
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Feed one direction request through the reversal policy
    pub fn handle(&mut self, requested: Direction) -> InputOutcome {
        if !requested.is_moving() {
            return InputOutcome::Ignored;
        }

        if !self.started {
            self.started = true;
            self.pending = requested;
            log::info!("Session started heading {:?}", requested);
            return InputOutcome::Started(requested);
        }

        if propose(requested, self.committed) != requested {
            log::trace!("Ignored reversal {:?} -> {:?}", self.committed, requested);
            return InputOutcome::IgnoredReversal;
        }
        self.pending = requested;
        InputOutcome::Accepted(requested)
    }

    /// Map a key name and handle it; unknown keys are ignored
    pub fn handle_key(&mut self, key: &str) -> InputOutcome {
        match Direction::from_key_name(key) {
            Some(direction) => self.handle(direction),
            None => InputOutcome::Ignored,
        }
    }

    /// Record that ticks have run with the pending heading
    pub fn commit(&mut self) {
        self.committed = self.pending;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
