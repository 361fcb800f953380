//! Shared utilities: frame timing and colors.

pub mod color;
/// Frame pacing and the per-frame clock.
pub mod frame_timing;

pub use color::Color;
pub use frame_timing::{FrameClock, FrameTiming};
