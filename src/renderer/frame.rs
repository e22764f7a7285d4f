//! Per-frame render payload
//!
//! A snapshot of what the host needs to paint: balls, pins and bucket slots.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::commands::LABEL_OFFSET_Y;
use crate::sim::{ColorClass, GameState};

/// A ball as drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSprite {
    pub pos: Vec2,
    pub radius: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// A pin as drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinSprite {
    pub pos: Vec2,
    pub radius: f32,
}

/// One bucket slot of the strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketSlot {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
    pub multiplier: f32,
    pub class: ColorClass,
    /// Label anchor, centered on the full slot width
    pub label_pos: Vec2,
}

impl BucketSlot {
    /// Label text, e.g. `10x` or `0.5x`
    pub fn label(&self) -> String {
        format!("{}x", self.multiplier)
    }
}

/// Everything the host paints for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub width: f32,
    pub height: f32,
    pub balls: Vec<BallSprite>,
    pub pins: Vec<PinSprite>,
    pub buckets: Vec<BucketSlot>,
}

impl RenderFrame {
    /// Snapshot the current state
    pub fn capture(state: &GameState) -> Self {
        let config = &state.config;
        let pin_radius = state.board.pin_radius();

        let pins = state
            .board
            .pins()
            .iter()
            .map(|pin| PinSprite {
                pos: pin.pos,
                radius: pin_radius,
            })
            .collect();

        let balls = state
            .balls
            .iter()
            .map(|ball| BallSprite {
                pos: ball.pos,
                radius: config.ball_radius,
                color: ball.color,
            })
            .collect();

        let slot_width = state.buckets.slot_width();
        let top = config.bucket_strip_top();
        let buckets = state
            .buckets
            .multipliers()
            .iter()
            .enumerate()
            .map(|(i, &multiplier)| BucketSlot {
                min: Vec2::new(state.buckets.slot_left(i), top),
                size: Vec2::new((slot_width - config.bucket_gap).max(0.0), config.bucket_height),
                multiplier,
                class: ColorClass::for_multiplier(multiplier),
                label_pos: Vec2::new(
                    state.buckets.slot_left(i) + slot_width / 2.0,
                    top + LABEL_OFFSET_Y,
                ),
            })
            .collect();

        Self {
            width: config.canvas_width,
            height: config.canvas_height,
            balls,
            pins,
            buckets,
        }
    }
}
