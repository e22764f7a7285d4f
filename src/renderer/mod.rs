//! Rendering adapter
//!
//! Turns simulation state into a frame payload and 2D draw commands. The
//! actual drawing surface belongs to the host.

pub mod commands;
pub mod frame;

pub use commands::{Canvas, DrawCommand, RecordingCanvas, Stroke, paint};
pub use frame::{BallSprite, BucketSlot, PinSprite, RenderFrame};
