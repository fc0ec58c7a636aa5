//! Terminal snapshot of a frame, for logs and the headless demo

use crate::session::RenderView;
use crate::sim::GamePhase;

/// Render the grid as text: `@` head, `o` body, `*` food, `.` empty.
/// Segments are snapped to the nearest cell.
pub fn render_ascii(view: &RenderView) -> String {
    let n = view.tile_count.max(1) as usize;
    let mut grid = vec![vec!['.'; n]; n];

    if (0..n).contains(&(view.food.x as usize)) && (0..n).contains(&(view.food.y as usize)) {
        grid[view.food.y as usize][view.food.x as usize] = '*';
    }

    for (i, seg) in view.segments.iter().enumerate().rev() {
        let x = (seg.x.round() as usize) % n;
        let y = (seg.y.round() as usize) % n;
        grid[y][x] = if i == 0 { '@' } else { 'o' };
    }

    let mut out = String::with_capacity(n * (n + 1) + 32);
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    let status = match view.phase {
        GamePhase::NotStarted => "ready",
        GamePhase::Running => "running",
        GamePhase::GameOver => "game over",
    };
    out.push_str(&format!("score {} ({})", view.score, status));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GameConfig, GameSession};
    use crate::sim::Cell;

    #[test]
    fn test_ascii_marks_head_and_food() {
        let mut session = GameSession::new(GameConfig {
            tile_count: 4,
            ..Default::default()
        });
        let mut view = session.frame(0.0);
        view.food = Cell::new(0, 3);
        let text = render_ascii(&view);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        // Start cell (10,10) wraps to (2,2) on a 4x4 grid
        assert_eq!(lines[2], "..@.");
        assert_eq!(lines[3], "*...");
        assert_eq!(lines[4], "score 0 (ready)");
    }

    #[test]
    fn test_ascii_snaps_wrapped_positions() {
        let mut session = GameSession::new(GameConfig {
            tile_count: 4,
            ..Default::default()
        });
        let mut view = session.frame(0.0);
        // 3.6 rounds to 4 and folds back onto column 0
        view.segments = vec![glam::Vec2::new(3.6, 0.0)];
        view.food = Cell::new(3, 3);
        let text = render_ascii(&view);
        assert!(text.starts_with("@...\n"));
    }
}
