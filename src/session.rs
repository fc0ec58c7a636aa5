//! Game session
//!
//! Owns the simulation state, the tick scheduler and the input router, and
//! hands read-only snapshots to the renderer once per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioManager, Tone};
use crate::consts::TILE_COUNT;
use crate::input::{InputOutcome, InputRouter};
use crate::settings::Settings;
use crate::sim::{
    Advance, Cell, Direction, GameEvent, GamePhase, GameState, TickScheduler, UpdateResult,
};

/// Everything needed to start a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells per grid edge
    pub tile_count: i32,
    /// Seed for food placement
    pub seed: u64,
    pub settings: Settings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: TILE_COUNT,
            seed: 0,
            settings: Settings::default(),
        }
    }
}

/// Per-frame hand-off to the render collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderView {
    pub phase: GamePhase,
    /// Snake after the latest tick, head first
    pub snake: Vec<Cell>,
    /// Snake before the latest tick
    pub previous: Vec<Cell>,
    /// Blend fraction between `previous` and `snake`
    pub blend: f32,
    /// Interpolated segment positions in cell units, head first
    pub segments: Vec<Vec2>,
    pub food: Cell,
    pub score: u32,
    /// Last accepted direction (drives head orientation)
    pub heading: Direction,
    pub tile_count: i32,
}

/// A single-player session with an explicit new/reset lifecycle
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    scheduler: TickScheduler,
    input: InputRouter,
    audio: AudioManager,
    events: Vec<GameEvent>,
    blend: f32,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(config.tile_count, config.seed);
        let scheduler = TickScheduler::new(config.settings.tick_interval_ms);
        let audio = AudioManager::from_settings(&config.settings);
        log::info!(
            "New session: {}x{} grid, seed {}, {} ms/tick",
            config.tile_count,
            config.tile_count,
            config.seed,
            scheduler.tick_interval_ms()
        );
        Self {
            config,
            state,
            scheduler,
            input: InputRouter::new(),
            audio,
            events: Vec::new(),
            blend: 0.0,
        }
    }

    /// Throw the current game away and wait for a new first key.
    /// Settings (including the tick interval) carry over.
    pub fn reset(&mut self, seed: u64) {
        self.config.seed = seed;
        self.state = GameState::new(self.config.tile_count, seed);
        self.scheduler.reset();
        self.input.reset();
        self.events.clear();
        self.blend = 0.0;
        log::info!("Session reset with seed {}", seed);
    }

    pub fn phase(&self) -> GamePhase {
        self.scheduler.phase()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn heading(&self) -> Direction {
        self.input.current()
    }

    pub fn settings(&self) -> &Settings {
        &self.config.settings
    }

    pub fn tick_interval_ms(&self) -> f64 {
        self.scheduler.tick_interval_ms()
    }

    /// The single entry point for directional input
    pub fn handle_direction(&mut self, direction: Direction) -> InputOutcome {
        if self.phase() == GamePhase::GameOver {
            return InputOutcome::Ignored;
        }
        let outcome = self.input.handle(direction);
        if let InputOutcome::Started(_) = outcome {
            self.scheduler.start();
        }
        outcome
    }

    /// Route a key name (e.g. `ArrowUp`) through the input policy
    pub fn handle_key(&mut self, key: &str) -> InputOutcome {
        match Direction::from_key_name(key) {
            Some(direction) => self.handle_direction(direction),
            None => InputOutcome::Ignored,
        }
    }

    /// Settings hook; non-finite values are ignored, others clamped
    pub fn set_tick_interval_ms(&mut self, ms: f64) {
        self.config.settings.set_tick_interval_ms(ms);
        self.scheduler.set_tick_interval_ms(ms);
    }

    /// Raw speed-slider text; non-numeric input is ignored
    pub fn apply_speed_input(&mut self, raw: &str) {
        if self.config.settings.apply_speed_input(raw) {
            self.scheduler.set_tick_interval_ms(self.config.settings.tick_interval_ms);
        }
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.config.settings.sound_enabled = enabled;
        self.audio.set_enabled(enabled);
    }

    /// Master volume (0.0 - 1.0), kept in settings and applied to audio
    pub fn set_master_volume(&mut self, volume: f32) {
        self.config.settings.master_volume = volume.clamp(0.0, 1.0);
        self.audio.set_master_volume(volume);
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    /// Tones to play for an event under the current sound settings
    pub fn cues_for(&self, event: &GameEvent) -> Vec<Tone> {
        self.audio.cues_for(event)
    }

    /// Run the logic due at `now`, then describe what to draw
    pub fn frame(&mut self, now: f64) -> RenderView {
        let advance = self.scheduler.advance(now, &mut self.state, self.input.current());
        if advance.updates_run > 0 {
            self.input.commit();
        }
        self.raise_events(&advance);
        self.blend = advance.render_fraction;
        self.view()
    }

    fn raise_events(&mut self, advance: &Advance) {
        let mut score = self.state.score - advance.ate_count() as u32;
        for result in &advance.results {
            match result {
                UpdateResult::Ate => {
                    score += 1;
                    self.events.push(GameEvent::FoodEaten { score });
                }
                UpdateResult::Collided => self.events.push(GameEvent::GameOver { score }),
                UpdateResult::Continued => {}
            }
        }
    }

    /// Snapshot for the renderer without advancing time
    pub fn view(&self) -> RenderView {
        let previous = self.scheduler.previous_snapshot().to_vec();
        let segments = self.state.grid.interpolate_snake(&previous, &self.state.snake, self.blend);
        RenderView {
            phase: self.phase(),
            snake: self.state.snapshot(),
            previous,
            blend: self.blend,
            segments,
            food: self.state.food,
            score: self.state.score,
            heading: self.input.current(),
            tile_count: self.state.grid.tile_count,
        }
    }

    /// Events raised since the last drain, in tick order
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether the render loop should schedule another frame
    pub fn wants_next_frame(&self) -> bool {
        self.phase() == GamePhase::Running
    }
}
