//! Pin field layout
//!
//! Pins are laid out once in staggered rows: row `r` holds `r + 3` pins,
//! each row centered in the canvas, giving the triangular Plinko field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::PlinkoConfig;

/// A fixed circular obstacle. Radius is board-wide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub pos: Vec2,
}

/// Immutable pin layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    pins: Vec<Pin>,
    pin_radius: f32,
}

/// Number of pins in row `row`
#[inline]
pub fn pins_in_row(row: u32) -> u32 {
    row + 3
}

/// Total pins across `rows` rows
pub fn total_pins(rows: u32) -> usize {
    (0..rows).map(|r| pins_in_row(r) as usize).sum()
}

impl Board {
    /// Build the triangular pin field
    pub fn build(
        rows: u32,
        canvas_width: f32,
        start_x: f32,
        start_y: f32,
        h_spacing: f32,
        v_spacing: f32,
        pin_radius: f32,
    ) -> Self {
        let mut pins = Vec::with_capacity(total_pins(rows));

        for row in 0..rows {
            let count = pins_in_row(row);
            let row_width = (count - 1) as f32 * h_spacing;
            let offset_x = start_x + (canvas_width - 2.0 * start_x - row_width) / 2.0;
            let y = start_y + row as f32 * v_spacing;

            for col in 0..count {
                pins.push(Pin {
                    pos: Vec2::new(offset_x + col as f32 * h_spacing, y),
                });
            }
        }

        Self { pins, pin_radius }
    }

    pub fn from_config(config: &PlinkoConfig) -> Self {
        let board = Self::build(
            config.rows,
            config.canvas_width,
            config.pin_start_x,
            config.pin_start_y,
            config.pin_h_spacing,
            config.pin_v_spacing,
            config.pin_radius,
        );
        log::info!("Board built: {} rows, {} pins", config.rows, board.pins.len());
        board
    }

    /// A board with no pins (open drop)
    pub fn empty(pin_radius: f32) -> Self {
        Self {
            pins: Vec::new(),
            pin_radius,
        }
    }

    /// A board from explicit pin positions
    pub fn from_pins(pins: Vec<Pin>, pin_radius: f32) -> Self {
        Self { pins, pin_radius }
    }

    #[inline]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    #[inline]
    pub fn pin_radius(&self) -> f32 {
        self.pin_radius
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_board() -> Board {
        Board::from_config(&PlinkoConfig::default())
    }

    /// Pins of one row, by the row's shared y
    fn row_xs(board: &Board, y: f32) -> Vec<f32> {
        board
            .pins()
            .iter()
            .filter(|p| (p.pos.y - y).abs() < 0.001)
            .map(|p| p.pos.x)
            .collect()
    }

    #[test]
    fn test_reference_layout() {
        let board = reference_board();
        // 3 + 4 + ... + 14
        assert_eq!(board.len(), 102);

        // First row: 3 pins centered on 300
        let first = row_xs(&board, 100.0);
        assert_eq!(first, vec![260.0, 300.0, 340.0]);

        // Last row at y = 100 + 11 * 50
        let last = row_xs(&board, 650.0);
        assert_eq!(last.len(), 14);
        assert!((last[0] - 40.0).abs() < 0.001);
        assert!((last[13] - 560.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_rows() {
        let board = Board::build(0, 600.0, 100.0, 100.0, 40.0, 50.0, 4.0);
        assert!(board.is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: pin count is the sum of (r + 3) over all rows
            #[test]
            fn prop_pin_count(rows in 0u32..30) {
                let board = Board::build(rows, 600.0, 100.0, 100.0, 40.0, 50.0, 4.0);
                prop_assert_eq!(board.len(), total_pins(rows));
                let expected: u32 = (0..rows).map(|r| r + 3).sum();
                prop_assert_eq!(board.len() as u32, expected);
            }

            /// Property: every row is centered on canvas_width / 2
            #[test]
            fn prop_rows_centered(
                rows in 1u32..20,
                width in 100.0f32..2000.0,
                start_x in 0.0f32..100.0,
                h_spacing in 5.0f32..60.0,
            ) {
                let v_spacing = 30.0;
                let board = Board::build(rows, width, start_x, 50.0, h_spacing, v_spacing, 4.0);
                for row in 0..rows {
                    let y = 50.0 + row as f32 * v_spacing;
                    let xs = row_xs(&board, y);
                    prop_assert_eq!(xs.len() as u32, pins_in_row(row));
                    let min = xs.iter().cloned().fold(f32::INFINITY, f32::min);
                    let max = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
                    prop_assert!((min + max - width).abs() < 0.01 * width.max(1.0));
                }
            }
        }
    }
}
