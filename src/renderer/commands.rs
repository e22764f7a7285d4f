//! Draw commands for a 2D canvas
//!
//! The host owns the real drawing surface. It implements [`Canvas`] and
//! receives circles, rects and text in painter's order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::frame::RenderFrame;
use crate::rgb_to_rgba;

/// Pin fill (gold)
pub const PIN_COLOR: u32 = 0xFFD700;
/// Ball outline and label color
pub const OUTLINE_COLOR: u32 = 0xFFFFFF;
pub const OUTLINE_WIDTH: f32 = 2.0;
pub const LABEL_SIZE: f32 = 14.0;
/// Label baseline below the bucket top
pub const LABEL_OFFSET_Y: f32 = 22.0;

/// Outline around a filled shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: [f32; 4],
    pub width: f32,
}

/// A single draw operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Clear the whole canvas
    Clear { width: f32, height: f32 },
    Circle {
        center: Vec2,
        radius: f32,
        fill: [f32; 4],
        stroke: Option<Stroke>,
    },
    Rect { min: Vec2, size: Vec2, fill: [f32; 4] },
    /// Bold text centered horizontally on `pos.x`, baseline at `pos.y`
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: [f32; 4],
    },
}

/// External drawing surface
pub trait Canvas {
    fn draw(&mut self, command: &DrawCommand);
}

/// Canvas that keeps every command (headless hosts and tests)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }
}

impl RenderFrame {
    /// Commands for this frame: clear, pins, buckets with labels, then balls
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands =
            Vec::with_capacity(1 + self.pins.len() + self.buckets.len() * 2 + self.balls.len());

        commands.push(DrawCommand::Clear {
            width: self.width,
            height: self.height,
        });

        let pin_fill = rgb_to_rgba(PIN_COLOR, 1.0);
        for pin in &self.pins {
            commands.push(DrawCommand::Circle {
                center: pin.pos,
                radius: pin.radius,
                fill: pin_fill,
                stroke: None,
            });
        }

        let label_color = rgb_to_rgba(OUTLINE_COLOR, 1.0);
        for slot in &self.buckets {
            commands.push(DrawCommand::Rect {
                min: slot.min,
                size: slot.size,
                fill: rgb_to_rgba(slot.class.rgb(), 1.0),
            });
            commands.push(DrawCommand::Text {
                pos: slot.label_pos,
                text: slot.label(),
                size: LABEL_SIZE,
                color: label_color,
            });
        }

        let outline = Stroke {
            color: rgb_to_rgba(OUTLINE_COLOR, 1.0),
            width: OUTLINE_WIDTH,
        };
        for ball in &self.balls {
            commands.push(DrawCommand::Circle {
                center: ball.pos,
                radius: ball.radius,
                fill: rgb_to_rgba(ball.color, 1.0),
                stroke: Some(outline),
            });
        }

        commands
    }
}

/// Paint one frame into a canvas
pub fn paint(frame: &RenderFrame, canvas: &mut impl Canvas) {
    for command in frame.draw_commands() {
        canvas.draw(&command);
    }
}
