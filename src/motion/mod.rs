//! Per-frame motion primitives.
//!
//! Each primitive is a small state holder that writes one
//! [`Transform`](crate::scene::Transform) per tick from the frame's
//! [`FrameClock`]. Primitives never allocate, never block and never touch
//! the engine; components publish the resulting transform afterwards.

/// Additive sinusoidal displacement.
pub mod bob;
/// Orbit + bob + spin bundle for floating models.
pub mod float;
/// Exponential smoothing toward the pointer.
pub mod follow;
/// Circular motion around a target.
pub mod orbit;
/// Per-axis accumulated rotation.
pub mod spin;

pub use bob::Bob;
pub use float::FloatMotion;
pub use follow::MouseFollow;
pub use orbit::{Orbit, OrbitState};
pub use spin::Spin;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::Transform;
use crate::util::frame_timing::FrameClock;

/// A motion primitive driven by the frame clock.
pub trait Motion {
    /// Update `transform` for this tick.
    fn apply(&mut self, clock: FrameClock, transform: &mut Transform);
}

/// Principal axis selector for self-rotation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Local X.
    X,
    /// Local Y.
    #[default]
    Y,
    /// Local Z.
    Z,
}

impl Axis {
    /// Component index into a `Vec3`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Unit vector along this axis.
    #[must_use]
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }
}
