//! Fixed timestep tick scheduler
//!
//! Turns wall-clock frame timestamps into zero or more logic ticks plus a
//! blend fraction for rendering between the last two snapshots.

use serde::{Deserialize, Serialize};

use super::state::{Cell, Direction, GamePhase, GameState, UpdateResult};
use crate::clamp_tick_interval;
use crate::consts::DEFAULT_TICK_INTERVAL_MS;

/// What one call to [`TickScheduler::advance`] did
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Advance {
    /// Logic ticks run during this call
    pub updates_run: u32,
    /// Progress from the previous snapshot to the current state, in [0, 1]
    pub render_fraction: f32,
    /// Per-tick outcomes, oldest first
    pub results: Vec<UpdateResult>,
}

impl Advance {
    fn idle(render_fraction: f32) -> Self {
        Self {
            updates_run: 0,
            render_fraction,
            results: Vec::new(),
        }
    }

    pub fn ate_count(&self) -> usize {
        self.results.iter().filter(|r| **r == UpdateResult::Ate).count()
    }

    pub fn collided(&self) -> bool {
        self.results.contains(&UpdateResult::Collided)
    }
}

/// Fixed-step accumulator clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickScheduler {
    phase: GamePhase,
    /// Timestamp (ms) of the last committed tick; None until baselined
    last_tick_time: Option<f64>,
    tick_interval_ms: f64,
    /// Snake cells at the start of the current tick window
    previous: Vec<Cell>,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL_MS)
    }
}

impl TickScheduler {
    pub fn new(tick_interval_ms: f64) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            last_tick_time: None,
            tick_interval_ms: clamp_tick_interval(tick_interval_ms)
                .unwrap_or(DEFAULT_TICK_INTERVAL_MS),
            previous: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn tick_interval_ms(&self) -> f64 {
        self.tick_interval_ms
    }

    /// Snake cells before the most recent tick
    pub fn previous_snapshot(&self) -> &[Cell] {
        &self.previous
    }

    /// Leave the idle phase. The clock baselines on the next `advance`.
    pub fn start(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
            self.last_tick_time = None;
        }
    }

    /// Back to idle for a new session, keeping the configured interval
    pub fn reset(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.last_tick_time = None;
        self.previous.clear();
    }

    /// Change the tick period. Non-finite values are ignored, the rest are
    /// clamped. Applies from the next accumulator check onward.
    pub fn set_tick_interval_ms(&mut self, ms: f64) {
        if let Some(ms) = clamp_tick_interval(ms) {
            if ms != self.tick_interval_ms {
                log::debug!("Tick interval {} -> {} ms", self.tick_interval_ms, ms);
            }
            self.tick_interval_ms = ms;
        }
    }

    /// Run every tick that is due at `now` and report the blend fraction.
    pub fn advance(&mut self, now: f64, state: &mut GameState, direction: Direction) -> Advance {
        match self.phase {
            GamePhase::NotStarted => return Advance::idle(0.0),
            GamePhase::GameOver => return Advance::idle(1.0),
            GamePhase::Running => {}
        }

        let Some(mut last) = self.last_tick_time else {
            self.last_tick_time = Some(now);
            self.previous = state.snapshot();
            return Advance::idle(0.0);
        };

        let mut results = Vec::new();
        while now - last >= self.tick_interval_ms {
            self.previous = state.snapshot();
            let result = state.update(direction);
            results.push(result);
            last += self.tick_interval_ms;

            if result == UpdateResult::Collided {
                log::info!("Game over: score {} after {} ticks", state.score, state.tick_count);
                self.phase = GamePhase::GameOver;
                break;
            }
        }
        self.last_tick_time = Some(last);

        let render_fraction = if self.phase == GamePhase::GameOver {
            1.0
        } else {
            ((now - last) / self.tick_interval_ms).clamp(0.0, 1.0) as f32
        };

        Advance {
            updates_run: results.len() as u32,
            render_fraction,
            results,
        }
    }
}
