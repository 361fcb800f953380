//! Input handling: pointer events routed to interaction wrappers and the
//! canvas-wide pointer position read by mouse-follow motion.

/// Platform-agnostic pointer events and cursor styles.
pub mod event;
/// Pointer position tracking and NDC conversion.
pub mod pointer;

pub use event::{CursorStyle, PointerEvent};
pub use pointer::PointerState;
