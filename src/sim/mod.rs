//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod grid;
pub mod state;
pub mod tick;

pub use grid::Grid;
pub use state::{Cell, Direction, GameEvent, GamePhase, GameState, RngState, UpdateResult};
pub use tick::{Advance, TickScheduler};
