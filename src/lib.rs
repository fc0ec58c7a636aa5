//! Glide Snake - grid snake with smooth motion
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid math, snake rules, fixed-step clock)
//! - `input`: Direction policy (reversal rejection, session start)
//! - `session`: Owned game session tying the simulation to its collaborators
//! - `renderer`: Draw-list generation from interpolated snapshots
//! - `audio`: Procedural sound cues for game events
//! - `ux`: Deferred end-of-game flow (message, restart)
//! - `settings`: Player preferences

pub mod audio;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ux;

pub use input::{InputOutcome, InputRouter, propose};
pub use session::{GameConfig, GameSession, RenderView};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Pixel size of one grid cell
    pub const GRID_SIZE_PX: f32 = 20.0;
    /// Canvas edge length in pixels
    pub const CANVAS_SIZE_PX: f32 = 400.0;
    /// Cells per grid edge (the grid is square)
    pub const TILE_COUNT: i32 = (CANVAS_SIZE_PX / GRID_SIZE_PX) as i32;

    /// Snake head at session start
    pub const START_CELL: (i32, i32) = (10, 10);
    /// Food cell before the first placement roll
    pub const START_FOOD: (i32, i32) = (5, 5);

    /// Logic tick period (ms per grid step)
    pub const DEFAULT_TICK_INTERVAL_MS: f64 = 100.0;
    /// Fastest allowed tick period
    pub const MIN_TICK_INTERVAL_MS: f64 = 50.0;
    /// Slowest allowed tick period
    pub const MAX_TICK_INTERVAL_MS: f64 = 300.0;

    /// Delay between collision and the game-over message
    pub const GAME_OVER_MESSAGE_DELAY_MS: f64 = 500.0;
    /// Delay between collision and the automatic restart
    pub const GAME_OVER_RESTART_DELAY_MS: f64 = 1000.0;
}

/// Clamp a tick interval to the allowed range, rejecting non-finite input
#[inline]
pub fn clamp_tick_interval(ms: f64) -> Option<f64> {
    use consts::{MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};
    if !ms.is_finite() {
        return None;
    }
    Some(ms.round().clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS))
}
