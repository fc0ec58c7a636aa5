//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::{DrawCommand, RenderStyle};
use crate::sim::Direction;

/// Pixel center of a (possibly fractional) cell position
#[inline]
pub fn cell_center(pos: Vec2, grid_size: f32) -> Vec2 {
    pos * grid_size + Vec2::splat(grid_size / 2.0)
}

/// A filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4]) -> DrawCommand {
    DrawCommand::Circle { center, radius, color }
}

/// Eye offset from the head center; a standing snake looks right
pub fn eye_offset(heading: Direction) -> Vec2 {
    match heading {
        Direction::None | Direction::Right => Vec2::new(4.0, 0.0),
        Direction::Left => Vec2::new(-4.0, 0.0),
        Direction::Up => Vec2::new(0.0, -4.0),
        Direction::Down => Vec2::new(0.0, 4.0),
    }
}

/// Eyes and mouth for a head drawn at `center`
pub fn head_features(center: Vec2, heading: Direction, style: &RenderStyle) -> Vec<DrawCommand> {
    let offset = eye_offset(heading);
    let eye_radius = 4.0;

    let mut cmds = vec![
        circle(center + offset + Vec2::new(-3.0, -3.0), eye_radius, style.eye),
        circle(center + offset + Vec2::new(3.0, -3.0), eye_radius, style.eye),
    ];

    let mouth_center = if heading == Direction::None {
        center + Vec2::new(6.0, 4.0)
    } else {
        center + offset + Vec2::new(0.0, 4.0)
    };
    // Horizontal heading gets a narrow smile, vertical a half circle
    let (start_angle, end_angle) = match heading {
        Direction::Left | Direction::Right => (PI * 0.25, PI * 0.75),
        _ => (0.0, PI),
    };
    cmds.push(DrawCommand::Arc {
        center: mouth_center,
        radius: 3.0,
        start_angle,
        end_angle,
        line_width: 2.0,
        color: style.mouth,
    });

    cmds
}
