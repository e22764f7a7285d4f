//! Plinko - a pin-field drop game
//!
//! Core modules:
//! - `sim`: Simulation (board, balls, collisions, buckets, score)
//! - `renderer`: Per-frame render payload and draw commands for a host canvas
//! - `config`: Board and physics configuration

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::PlinkoConfig;
pub use error::ConfigError;

/// Reference configuration constants
pub mod consts {
    /// Host tick rate (one `tick` per display refresh)
    pub const TICK_HZ: u32 = 60;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 700.0;

    /// Pin field
    pub const ROWS: u32 = 12;
    pub const PIN_RADIUS: f32 = 4.0;
    pub const PIN_START_X: f32 = 100.0;
    pub const PIN_START_Y: f32 = 100.0;
    pub const PIN_H_SPACING: f32 = 40.0;
    pub const PIN_V_SPACING: f32 = 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Damping applied on pin rebounds and wall hits
    pub const BOUNCE: f32 = 0.7;
    /// Speed a ball leaves a pin with, before damping and jitter
    pub const REBOUND_SPEED: f32 = 3.0;
    /// Horizontal rebound jitter (uniform in ±this)
    pub const REBOUND_JITTER: f32 = 1.0;

    /// Spawn
    pub const SPAWN_Y: f32 = 20.0;
    pub const SPAWN_X_JITTER: f32 = 10.0;
    pub const SPAWN_VX_JITTER: f32 = 1.0;

    /// Bucket strip sits this far above the canvas bottom
    pub const BUCKET_STRIP_OFFSET: f32 = 40.0;
    pub const BUCKET_HEIGHT: f32 = 35.0;
    pub const BUCKET_GAP: f32 = 2.0;

    /// Ticks a settled ball stays on the board
    pub const DWELL_TICKS: u32 = 60;

    pub const MULTIPLIERS: [f32; 11] = [10.0, 5.0, 2.0, 1.0, 0.5, 0.3, 0.5, 1.0, 2.0, 5.0, 10.0];

    /// Ball palette (0xRRGGBB)
    pub const PALETTE: [u32; 5] = [0xFF6B6B, 0x4ECDC4, 0x45B7D1, 0xFFA07A, 0x98D8C8];
}

/// Convert a 0xRRGGBB color to normalized RGBA
#[inline]
pub fn rgb_to_rgba(rgb: u32, alpha: f32) -> [f32; 4] {
    [
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
        alpha,
    ]
}
