//! Simulation module
//!
//! All gameplay logic lives here, with no rendering or platform dependencies:
//! - One `tick` per host frame
//! - Every random draw goes through an injected `RandomSource`
//! - Stable iteration order (by ball ID)

pub mod board;
pub mod bucket;
pub mod collision;
pub mod random;
pub mod score;
pub mod state;
pub mod tick;

pub use board::{Board, Pin};
pub use bucket::{BucketStrip, ColorClass, resolve};
pub use collision::{CollisionResult, ball_pin_collision};
pub use random::{RandomSource, ScriptedSource, SimRng};
pub use score::Scoreboard;
pub use state::{Ball, BallPhase, GameState, SettleEvent};
pub use tick::{step, tick};
