//! Rendering module
//!
//! Turns a [`RenderView`] into a flat draw list. The platform backend (canvas,
//! GPU, terminal) executes the list; nothing here touches pixels.

pub mod ascii;
pub mod shapes;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_SIZE_PX, GRID_SIZE_PX};
use crate::session::RenderView;
use crate::sim::GamePhase;

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole canvas
    Clear { color: [f32; 4] },
    /// Filled circle
    Circle { center: Vec2, radius: f32, color: [f32; 4] },
    /// Stroked arc (angles in radians, clockwise from +x)
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        line_width: f32,
        color: [f32; 4],
    },
    /// Text anchored at its baseline-left corner
    Text { pos: Vec2, text: String, size_px: f32, color: [f32; 4] },
}

/// Anything that can execute draw commands
pub trait Canvas {
    fn draw(&mut self, cmd: &DrawCommand);
}

/// Convert 0xRRGGBB to normalized RGBA
pub fn rgb(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// Colors and sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub grid_size: f32,
    pub canvas_height: f32,
    pub background: [f32; 4],
    pub body: [f32; 4],
    pub tail: [f32; 4],
    pub head: [f32; 4],
    pub eye: [f32; 4],
    pub mouth: [f32; 4],
    pub food: [f32; 4],
    pub text: [f32; 4],
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE_PX,
            canvas_height: CANVAS_SIZE_PX,
            background: rgb(0x111111),
            body: rgb(0x00ff00),
            tail: rgb(0x145a1f),
            head: rgb(0x2ecc40),
            eye: rgb(0xffffff),
            mouth: rgb(0x222222),
            food: rgb(0xff0000),
            text: rgb(0xffffff),
        }
    }
}

/// Build the draw list for one frame
///
/// Order: background, body, tail, head (+ face), food, score, start prompt.
pub fn build_frame(view: &RenderView, style: &RenderStyle) -> Vec<DrawCommand> {
    let g = style.grid_size;
    let segs = &view.segments;
    let mut cmds = Vec::with_capacity(segs.len() + 8);

    cmds.push(DrawCommand::Clear { color: style.background });

    // Body excludes head and tail
    if segs.len() > 2 {
        for seg in &segs[1..segs.len() - 1] {
            cmds.push(shapes::circle(shapes::cell_center(*seg, g), g / 2.0 - 0.25, style.body));
        }
    }

    if segs.len() > 1 {
        let tail = segs[segs.len() - 1];
        cmds.push(shapes::circle(shapes::cell_center(tail, g), g / 2.0 - 1.5, style.tail));
    }

    if let Some(head) = segs.first() {
        let center = shapes::cell_center(*head, g);
        cmds.push(shapes::circle(center, g / 2.0 - 0.25, style.head));
        cmds.extend(shapes::head_features(center, view.heading, style));
    }

    let food = Vec2::new(view.food.x as f32, view.food.y as f32);
    cmds.push(shapes::circle(shapes::cell_center(food, g), g / 2.0 - 0.25, style.food));

    cmds.push(DrawCommand::Text {
        pos: Vec2::new(10.0, 20.0),
        text: format!("Score: {}", view.score),
        size_px: 18.0,
        color: style.text,
    });

    if view.phase == GamePhase::NotStarted {
        cmds.push(DrawCommand::Text {
            pos: Vec2::new(50.0, style.canvas_height / 2.0),
            text: "Press an arrow key to start".to_string(),
            size_px: 24.0,
            color: style.text,
        });
    }

    cmds
}

/// Build the frame and feed it to a canvas
pub fn render(view: &RenderView, style: &RenderStyle, canvas: &mut impl Canvas) {
    for cmd in build_frame(view, style) {
        canvas.draw(&cmd);
    }
}
