//! Game state and core simulation types
//!
//! The snake, food and score live here together with the rules that move them.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::consts::{START_CELL, START_FOOD};

/// A grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in a direction (not wrapped)
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Movement direction. `None` is the standing-still value before a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions that actually move the snake
    pub const MOVING: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (dx, dy) per tick; y grows downward
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The axis-opposite direction
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_moving(&self) -> bool {
        *self != Direction::None
    }

    /// Map a keyboard key name (DOM `KeyboardEvent.key` style) to a direction
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Outcome of one logic tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateResult {
    /// Snake moved one cell, length unchanged
    Continued,
    /// Snake moved onto the food and grew by one cell
    Ate,
    /// Next head cell was part of the body; state left untouched
    Collided,
}

/// Session phase as seen by the scheduler and the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first direction key; nothing moves
    #[default]
    NotStarted,
    /// Logic ticks are being produced
    Running,
    /// Snake hit itself; terminal until reset
    GameOver,
}

/// Events raised by the core for the audio/UX collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten { score: u32 },
    GameOver { score: u32 },
}

/// RNG state wrapper for reproducible sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Authoritative snake/food/score model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    /// Grid the snake lives on
    pub grid: Grid,
    /// Body cells, head first
    pub snake: Vec<Cell>,
    /// Current food cell
    pub food: Cell,
    /// Foods eaten this session
    pub score: u32,
    /// Committed (non-colliding) ticks
    pub tick_count: u64,
    /// Seed the food sequence derives from
    pub seed: u64,
    #[serde(skip)]
    rng: Pcg32,
}

impl GameState {
    /// Create the start-of-session state and roll the first food cell
    pub fn new(tile_count: i32, seed: u64) -> Self {
        let grid = Grid::new(tile_count);
        let mut state = Self {
            grid,
            snake: vec![grid.wrap_cell(START_CELL.into())],
            food: grid.wrap_cell(START_FOOD.into()),
            score: 0,
            tick_count: 0,
            seed,
            rng: RngState::new(seed).to_rng(),
        };
        state.place_food();
        state
    }

    /// Head cell
    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Whether a cell is covered by any snake segment
    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    /// Copy of the body for interpolation snapshots
    pub fn snapshot(&self) -> Vec<Cell> {
        self.snake.clone()
    }

    /// Advance the snake one cell in `direction`.
    ///
    /// A standing direction is a no-op. On collision nothing is modified and
    /// the caller must stop ticking.
    ///
    /// Food lands off the snake only while a free cell remains. When eating
    /// fills the board, `place_food` finds no cell and the food stays on the
    /// new head until the next tick collides.
    pub fn update(&mut self, direction: Direction) -> UpdateResult {
        if !direction.is_moving() {
            return UpdateResult::Continued;
        }

        let head = self.grid.wrap_cell(self.head().offset(direction));

        if self.occupies(head) {
            log::debug!(
                "Self collision at ({}, {}) after {} ticks",
                head.x,
                head.y,
                self.tick_count
            );
            return UpdateResult::Collided;
        }

        self.snake.insert(0, head);
        self.tick_count += 1;

        if head == self.food {
            self.score += 1;
            self.place_food();
            UpdateResult::Ate
        } else {
            self.snake.pop();
            UpdateResult::Continued
        }
    }

    /// Roll a new food cell uniformly among the free cells.
    ///
    /// Returns false (food unchanged) when the snake covers the whole board.
    pub fn place_food(&mut self) -> bool {
        let occupied: HashSet<Cell> = self.snake.iter().copied().collect();
        if occupied.len() >= self.grid.area() {
            log::warn!("No free cell left for food ({} segments)", self.snake.len());
            return false;
        }

        let n = self.grid.tile_count;
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let candidate = Cell::new(self.rng.random_range(0..n), self.rng.random_range(0..n));
            if !occupied.contains(&candidate) {
                self.food = candidate;
                log::trace!(
                    "Food placed at ({}, {}) after {} attempts",
                    candidate.x,
                    candidate.y,
                    attempts
                );
                return true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state_with(snake: &[(i32, i32)], food: (i32, i32)) -> GameState {
        let mut state = GameState::new(20, 7);
        state.snake = snake.iter().map(|&c| c.into()).collect();
        state.food = food.into();
        state
    }

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(20, 1);
        assert_eq!(state.snake, vec![Cell::new(10, 10)]);
        assert_eq!(state.score, 0);
        assert!(!state.occupies(state.food));
        assert!(state.grid.contains(state.food));
    }

    #[test]
    fn test_single_step_no_growth() {
        let mut state = state_with(&[(10, 10)], (0, 0));
        assert_eq!(state.update(Direction::Right), UpdateResult::Continued);
        assert_eq!(state.snake, vec![Cell::new(11, 10)]);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn test_standing_still_is_noop() {
        let mut state = state_with(&[(10, 10)], (0, 0));
        let before = state.clone();
        assert_eq!(state.update(Direction::None), UpdateResult::Continued);
        assert_eq!(state, before);
    }

    #[test]
    fn test_wraps_across_edges() {
        let mut state = state_with(&[(19, 0)], (5, 5));
        state.update(Direction::Right);
        assert_eq!(state.head(), Cell::new(0, 0));
        state.update(Direction::Up);
        assert_eq!(state.head(), Cell::new(0, 19));
        state.update(Direction::Left);
        assert_eq!(state.head(), Cell::new(19, 19));
        state.update(Direction::Down);
        assert_eq!(state.head(), Cell::new(19, 0));
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut state = state_with(&[(4, 5)], (5, 5));
        assert_eq!(state.update(Direction::Right), UpdateResult::Ate);
        assert_eq!(state.score, 1);
        assert_eq!(state.snake, vec![Cell::new(5, 5), Cell::new(4, 5)]);
        assert!(!state.occupies(state.food));
    }

    #[test]
    fn test_collision_leaves_state_untouched() {
        // Hook shape: moving left from the head runs into the body
        let mut state = state_with(&[(5, 5), (5, 6), (4, 6), (4, 5), (4, 4)], (15, 15));
        let before = state.clone();
        assert_eq!(state.update(Direction::Left), UpdateResult::Collided);
        assert_eq!(state, before);
    }

    #[test]
    fn test_collision_checks_current_tail() {
        // Tail cell still counts even though it would move away this tick
        let mut state = state_with(&[(5, 5), (6, 5), (6, 6), (5, 6)], (15, 15));
        assert_eq!(state.update(Direction::Down), UpdateResult::Collided);
    }

    #[test]
    fn test_reversal_into_neck_collides() {
        let mut state = state_with(&[(5, 5), (5, 6), (5, 7)], (15, 15));
        assert_eq!(state.update(Direction::Up), UpdateResult::Continued);
        assert_eq!(state.update(Direction::Down), UpdateResult::Collided);
    }

    #[test]
    fn test_place_food_full_board_keeps_food() {
        let mut state = GameState::new(2, 3);
        state.snake = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1), Cell::new(0, 1)];
        state.food = Cell::new(1, 1);
        assert!(!state.place_food());
        assert_eq!(state.food, Cell::new(1, 1));
    }

    #[test]
    fn test_eating_last_free_cell_fills_board() {
        let mut state = GameState::new(2, 3);
        state.snake = vec![Cell::new(1, 1), Cell::new(1, 0), Cell::new(0, 0)];
        state.food = Cell::new(0, 1);

        assert_eq!(state.update(Direction::Left), UpdateResult::Ate);
        assert_eq!(state.len(), 4);
        // No free cell: food stays under the head
        assert_eq!(state.food, state.head());
        assert_eq!(state.update(Direction::Up), UpdateResult::Collided);
    }

    #[test]
    fn test_place_food_finds_last_free_cell() {
        let mut state = GameState::new(2, 3);
        state.snake = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)];
        assert!(state.place_food());
        assert_eq!(state.food, Cell::new(0, 1));
    }

    #[test]
    fn test_same_seed_same_food() {
        let a = GameState::new(20, 4242);
        let b = GameState::new(20, 4242);
        assert_eq!(a.food, b.food);
    }

    #[test]
    fn test_direction_opposites() {
        for d in Direction::MOVING {
            assert_ne!(d, d.opposite());
            assert_eq!(d.opposite().opposite(), d);
            let (dx, dy) = d.delta();
            assert_eq!(d.opposite().delta(), (-dx, -dy));
        }
        assert_eq!(Direction::None.opposite(), Direction::None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Direction::from_key_name("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key_name("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key_name("D"), Some(Direction::Right));
        assert_eq!(Direction::from_key_name("Enter"), None);
    }

    fn moving_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::MOVING.to_vec())
    }

    proptest! {
        #[test]
        fn prop_head_in_bounds_and_length_rules(
            seed in any::<u64>(),
            moves in prop::collection::vec(moving_direction(), 1..200),
        ) {
            let mut state = GameState::new(12, seed);
            let mut heading = Direction::None;
            for requested in moves {
                // Same policy the input router applies
                if requested != heading.opposite() {
                    heading = requested;
                }
                let len_before = state.len();
                let score_before = state.score;
                match state.update(heading) {
                    UpdateResult::Continued => prop_assert_eq!(state.len(), len_before),
                    UpdateResult::Ate => {
                        prop_assert_eq!(state.len(), len_before + 1);
                        prop_assert_eq!(state.score, score_before + 1);
                    }
                    UpdateResult::Collided => break,
                }
                prop_assert!(state.grid.contains(state.head()));
                if state.len() < state.grid.area() {
                    prop_assert!(!state.occupies(state.food));
                }
            }
        }
    }
}
