//! Glide Snake entry point
//!
//! Native build runs a headless demo: an autopilot steers the snake while
//! synthetic 60 Hz frame timestamps drive the session, and events are logged.

use glide_snake::renderer::{RenderStyle, ascii::render_ascii, build_frame};
use glide_snake::sim::{Cell, Direction, GameEvent, GamePhase, GameState};
use glide_snake::ux::{GameOverFlow, UxAction};
use glide_snake::{GameConfig, GameSession, Settings};

/// Synthetic frame period (60 Hz)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Stop the demo after this much simulated time
const DEMO_LIMIT_MS: f64 = 120_000.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Glide Snake (native) starting...");

    let seed = std::env::var("GLIDE_SNAKE_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let settings = std::env::var("GLIDE_SNAKE_SETTINGS")
        .map(|json| Settings::from_json_or_default(&json))
        .unwrap_or_default();

    let style = RenderStyle::default();
    let mut session = GameSession::new(GameConfig {
        seed,
        settings,
        ..Default::default()
    });
    let mut ux = GameOverFlow::new();

    let mut now = 0.0;
    let mut frames = 0u64;
    let mut games = 1u64;
    session.frame(now);

    loop {
        now += FRAME_MS;
        frames += 1;

        if session.phase() != GamePhase::GameOver {
            let choice = autopilot(session.state(), session.heading());
            session.handle_direction(choice);
        }

        let view = session.frame(now);
        let draw_calls = build_frame(&view, &style).len();
        log::trace!(
            "frame {} blend {:.2} draw calls {}",
            frames,
            view.blend,
            draw_calls
        );

        for event in session.drain_events() {
            let tones = session.cues_for(&event);
            log::info!("{:?} ({} tones)", event, tones.len());
            if let GameEvent::GameOver { score } = event {
                ux.on_game_over(now, score);
            }
        }

        for action in ux.poll(now) {
            match action {
                UxAction::ShowMessage(msg) => {
                    println!("{}", render_ascii(&session.view()));
                    println!("{msg}");
                }
                UxAction::Restart => {
                    session.reset(seed.wrapping_add(games));
                    ux.clear();
                    games += 1;
                }
            }
        }
        if now >= DEMO_LIMIT_MS {
            println!("{}", render_ascii(&session.view()));
            break;
        }
    }

    log::info!(
        "Demo finished after {} frames and {} games, score {}",
        frames,
        games,
        session.score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds drive `GameSession::frame` from requestAnimationFrame instead
}

/// Pick the safe direction that gets closest to the food
fn autopilot(state: &GameState, heading: Direction) -> Direction {
    let grid = state.grid;
    let n = grid.tile_count;
    let head = state.head();
    let food = state.food;

    // Shortest distance on one wrapped axis
    let axis_dist = |a: i32, b: i32| {
        let d = (a - b).rem_euclid(n);
        d.min(n - d)
    };
    let distance = |c: Cell| axis_dist(c.x, food.x) + axis_dist(c.y, food.y);

    Direction::MOVING
        .into_iter()
        .filter(|d| !heading.is_moving() || *d != heading.opposite())
        .map(|d| (d, grid.wrap_cell(head.offset(d))))
        .filter(|(_, next)| !state.occupies(*next))
        .min_by_key(|(_, next)| distance(*next))
        .map(|(d, _)| d)
        .unwrap_or(heading)
}
