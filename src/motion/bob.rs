use glam::Vec3;

use super::Motion;
use crate::scene::Transform;
use crate::util::frame_timing::FrameClock;

/// Sinusoidal displacement along a fixed direction.
///
/// `apply` adds the offset to whatever base position the owner wrote this
/// tick, so it must run after the base is set (orbit, or a reset to the
/// rest position).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bob {
    direction: Vec3,
    /// Peak displacement in world units.
    pub amplitude: f32,
    /// Angular frequency in radians per second.
    pub frequency: f32,
}

impl Default for Bob {
    fn default() -> Self {
        Self::vertical(0.1, 2.0)
    }
}

impl Bob {
    /// Bob along `direction`; a zero direction falls back to +Y.
    #[must_use]
    pub fn new(direction: Vec3, amplitude: f32, frequency: f32) -> Self {
        Self {
            direction: direction.try_normalize().unwrap_or(Vec3::Y),
            amplitude,
            frequency,
        }
    }

    /// Bob along +Y.
    #[must_use]
    pub fn vertical(amplitude: f32, frequency: f32) -> Self {
        Self::new(Vec3::Y, amplitude, frequency)
    }

    /// Unit direction of travel.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Signed scalar offset at elapsed time `elapsed`.
    #[must_use]
    pub fn offset(&self, elapsed: f32) -> f32 {
        (elapsed * self.frequency).sin() * self.amplitude
    }

    /// Offset vector at elapsed time `elapsed`.
    #[must_use]
    pub fn displacement(&self, elapsed: f32) -> Vec3 {
        self.direction * self.offset(elapsed)
    }
}

impl Motion for Bob {
    fn apply(&mut self, clock: FrameClock, transform: &mut Transform) {
        transform.position += self.displacement(clock.elapsed);
    }
}
