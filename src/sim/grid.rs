//! Toroidal grid geometry
//!
//! Wrap-around normalization and shortest-path interpolation between two
//! consecutive logic ticks. Everything here is pure math over a square grid.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Cell;

/// A square grid whose edges wrap onto each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Cells per edge
    pub tile_count: i32,
}

impl Grid {
    pub fn new(tile_count: i32) -> Self {
        debug_assert!(tile_count > 0, "grid needs at least one cell");
        Self { tile_count }
    }

    /// Fold an integer axis value into [0, tile_count)
    #[inline]
    pub fn wrap(&self, value: i32) -> i32 {
        value.rem_euclid(self.tile_count)
    }

    /// Fold a real-valued axis position into [0, tile_count)
    #[inline]
    pub fn wrap_f32(&self, value: f32) -> f32 {
        let n = self.tile_count as f32;
        let wrapped = value.rem_euclid(n);
        // rem_euclid can round up to exactly n for tiny negative inputs
        if wrapped >= n { 0.0 } else { wrapped }
    }

    /// Wrap both axes of a cell
    #[inline]
    pub fn wrap_cell(&self, cell: Cell) -> Cell {
        Cell::new(self.wrap(cell.x), self.wrap(cell.y))
    }

    /// Whether a cell lies inside the grid bounds
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.tile_count).contains(&cell.x) && (0..self.tile_count).contains(&cell.y)
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        (self.tile_count as usize) * (self.tile_count as usize)
    }

    /// Interpolate one axis of a single-step move, taking the short way
    /// across an edge. The result is not wrapped.
    pub fn interpolate_axis(&self, prev: i32, curr: i32, t: f32) -> f32 {
        let mut delta = curr - prev;
        if delta > 1 {
            delta -= self.tile_count;
        } else if delta < -1 {
            delta += self.tile_count;
        }
        prev as f32 + delta as f32 * t
    }

    /// Interpolated position of a segment moving from `prev` to `curr`
    pub fn interpolate_segment(&self, prev: Cell, curr: Cell, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        Vec2::new(
            self.wrap_f32(self.interpolate_axis(prev.x, curr.x, t)),
            self.wrap_f32(self.interpolate_axis(prev.y, curr.y, t)),
        )
    }

    /// Interpolate every segment of the current snake against the previous
    /// snapshot.
    ///
    /// Segments that only exist on one side (growth, or an empty snapshot)
    /// fall back to the nearest endpoint that does exist, so a freshly grown
    /// tail sits still. Segments that exist only in the snapshot are dropped.
    pub fn interpolate_snake(&self, prev: &[Cell], curr: &[Cell], t: f32) -> Vec<Vec2> {
        curr.iter()
            .enumerate()
            .map(|(i, &now)| {
                // A brand new segment has no motion to show
                let before = prev.get(i).copied().unwrap_or(now);
                self.interpolate_segment(before, now, t)
            })
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::consts::TILE_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-5;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_wrap_negative_and_overflow() {
        let grid = Grid::new(20);
        assert_eq!(grid.wrap(-1), 19);
        assert_eq!(grid.wrap(20), 0);
        assert_eq!(grid.wrap(-21), 19);
        assert_eq!(grid.wrap(7), 7);
    }

    #[test]
    fn test_interpolate_axis_forward_across_edge() {
        let grid = Grid::new(20);
        // 19 -> 0 is a single step forward, not 19 steps back
        assert!((grid.interpolate_axis(19, 0, 0.5) - 19.5).abs() < EPS);
        assert!((grid.interpolate_axis(0, 19, 0.5) + 0.5).abs() < EPS);
        assert!((grid.interpolate_axis(4, 5, 0.25) - 4.25).abs() < EPS);
    }

    #[test]
    fn test_interpolate_segment_wraps_result() {
        let grid = Grid::new(20);
        let prev = Cell::new(19, 5);
        let curr = Cell::new(0, 5);

        assert!(close(grid.interpolate_segment(prev, curr, 0.0), Vec2::new(19.0, 5.0)));
        assert!(close(grid.interpolate_segment(prev, curr, 0.5), Vec2::new(19.5, 5.0)));
        assert!(close(grid.interpolate_segment(prev, curr, 1.0), Vec2::new(0.0, 5.0)));

        // Moving left across the edge lands in the last column mid-way
        let mid = grid.interpolate_segment(Cell::new(0, 5), Cell::new(19, 5), 0.5);
        assert!(close(mid, Vec2::new(19.5, 5.0)));
    }

    #[test]
    fn test_interpolate_snake_growth_holds_new_tail() {
        let grid = Grid::new(20);
        let prev = [Cell::new(5, 5), Cell::new(5, 6)];
        let curr = [Cell::new(5, 4), Cell::new(5, 5), Cell::new(5, 6)];

        let segs = grid.interpolate_snake(&prev, &curr, 0.5);
        assert_eq!(segs.len(), 3);
        assert!(close(segs[0], Vec2::new(5.0, 4.5)));
        assert!(close(segs[1], Vec2::new(5.0, 5.5)));
        // New tail has no source, so it does not move
        assert!(close(segs[2], Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn test_interpolate_snake_shrink_drops_extra() {
        let grid = Grid::new(20);
        let prev = [Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3)];
        let curr = [Cell::new(2, 1)];
        let segs = grid.interpolate_snake(&prev, &curr, 1.0);
        assert_eq!(segs.len(), 1);
        assert!(close(segs[0], Vec2::new(2.0, 1.0)));
    }

    #[test]
    fn test_interpolate_snake_empty_snapshot() {
        let grid = Grid::new(20);
        let curr = [Cell::new(3, 3)];
        let segs = grid.interpolate_snake(&[], &curr, 0.7);
        assert!(close(segs[0], Vec2::new(3.0, 3.0)));
    }

    fn single_step() -> impl Strategy<Value = (i32, i32)> {
        prop_oneof![Just((0, -1)), Just((0, 1)), Just((-1, 0)), Just((1, 0)), Just((0, 0))]
    }

    proptest! {
        #[test]
        fn prop_wrap_in_bounds(n in 1i32..64, v in -10_000i32..10_000) {
            let grid = Grid::new(n);
            let w = grid.wrap(v);
            prop_assert!((0..n).contains(&w));
        }

        #[test]
        fn prop_interpolation_endpoints(
            n in 2i32..40,
            x in 0i32..40,
            y in 0i32..40,
            (dx, dy) in single_step(),
        ) {
            let grid = Grid::new(n);
            let prev = grid.wrap_cell(Cell::new(x, y));
            let curr = grid.wrap_cell(Cell::new(prev.x + dx, prev.y + dy));

            let start = grid.interpolate_segment(prev, curr, 0.0);
            let end = grid.interpolate_segment(prev, curr, 1.0);
            prop_assert!(close(start, Vec2::new(prev.x as f32, prev.y as f32)));
            prop_assert!(close(end, Vec2::new(curr.x as f32, curr.y as f32)));
        }

        #[test]
        fn prop_interpolation_stays_on_grid(
            n in 2i32..40,
            x in 0i32..40,
            y in 0i32..40,
            (dx, dy) in single_step(),
            t in 0.0f32..=1.0,
        ) {
            let grid = Grid::new(n);
            let prev = grid.wrap_cell(Cell::new(x, y));
            let curr = grid.wrap_cell(Cell::new(prev.x + dx, prev.y + dy));
            let p = grid.interpolate_segment(prev, curr, t);
            prop_assert!(p.x >= 0.0 && p.x < n as f32);
            prop_assert!(p.y >= 0.0 && p.y < n as f32);
        }
    }
}
