//! End-of-game flow
//!
//! The core raises `GameOver` once, synchronously. Anything that should happen
//! later (the score message, the restart) is scheduled here and polled from
//! the frame loop.

use serde::{Deserialize, Serialize};

use crate::consts::{GAME_OVER_MESSAGE_DELAY_MS, GAME_OVER_RESTART_DELAY_MS};

/// A deferred UX action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UxAction {
    /// Show a blocking message to the player
    ShowMessage(String),
    /// Start a fresh session
    Restart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Scheduled {
    due_ms: f64,
    action: UxAction,
}

/// Time-ordered queue of deferred actions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameOverFlow {
    pending: Vec<Scheduled>,
}

pub fn game_over_message(score: u32) -> String {
    format!("Game Over! Your score: {score}")
}

impl GameOverFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the message and the restart relative to the collision time
    pub fn on_game_over(&mut self, now: f64, score: u32) {
        self.schedule(
            now + GAME_OVER_MESSAGE_DELAY_MS,
            UxAction::ShowMessage(game_over_message(score)),
        );
        self.schedule(now + GAME_OVER_RESTART_DELAY_MS, UxAction::Restart);
    }

    pub fn schedule(&mut self, due_ms: f64, action: UxAction) {
        // Stable insert keeps equal deadlines in scheduling order
        let idx = self.pending.partition_point(|s| s.due_ms <= due_ms);
        self.pending.insert(idx, Scheduled { due_ms, action });
    }

    /// Take every action due at `now`, oldest first
    pub fn poll(&mut self, now: f64) -> Vec<UxAction> {
        let due = self.pending.partition_point(|s| s.due_ms <= now);
        self.pending.drain(..due).map(|s| s.action).collect()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
