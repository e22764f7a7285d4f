//! Bucket strip: the row of multiplier slots at the bottom of the board

use serde::{Deserialize, Serialize};

/// Screen color class of a bucket, by payout size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorClass {
    /// 5x and up
    High,
    /// 2x up to 5x
    Medium,
    /// Below 2x
    Low,
}

impl ColorClass {
    pub fn for_multiplier(multiplier: f32) -> Self {
        if multiplier >= 5.0 {
            ColorClass::High
        } else if multiplier >= 2.0 {
            ColorClass::Medium
        } else {
            ColorClass::Low
        }
    }

    /// Fill color (0xRRGGBB)
    pub fn rgb(&self) -> u32 {
        match self {
            ColorClass::High => 0x4CAF50,
            ColorClass::Medium => 0x2196F3,
            ColorClass::Low => 0xFF9800,
        }
    }
}

/// Index of the slot under `x`, clamped into the strip
///
/// Total over all inputs: anything left of the canvas lands in slot 0,
/// anything at or past the right edge lands in the last slot.
pub fn slot_index(x: f32, slots: usize, canvas_width: f32) -> usize {
    if slots == 0 {
        return 0;
    }
    let slot_width = canvas_width / slots as f32;
    let raw = (x / slot_width).floor();
    if raw.is_nan() || raw < 0.0 {
        0
    } else {
        (raw as usize).min(slots - 1)
    }
}

/// Multiplier for a ball landing at `x`
///
/// `multipliers` must be non-empty (a validated config guarantees it).
pub fn resolve(x: f32, multipliers: &[f32], canvas_width: f32) -> f32 {
    multipliers[slot_index(x, multipliers.len(), canvas_width)]
}

/// Fixed ordered multiplier slots partitioning the canvas width
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketStrip {
    multipliers: Vec<f32>,
    canvas_width: f32,
}

impl BucketStrip {
    pub fn new(multipliers: Vec<f32>, canvas_width: f32) -> Self {
        Self {
            multipliers,
            canvas_width,
        }
    }

    #[inline]
    pub fn multipliers(&self) -> &[f32] {
        &self.multipliers
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    #[inline]
    pub fn slot_width(&self) -> f32 {
        self.canvas_width / self.multipliers.len().max(1) as f32
    }

    pub fn slot_index(&self, x: f32) -> usize {
        slot_index(x, self.multipliers.len(), self.canvas_width)
    }

    pub fn resolve(&self, x: f32) -> f32 {
        resolve(x, &self.multipliers, self.canvas_width)
    }

    /// Left edge of slot `index`
    pub fn slot_left(&self, index: usize) -> f32 {
        index as f32 * self.slot_width()
    }
}
