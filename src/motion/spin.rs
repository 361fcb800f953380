use glam::{EulerRot, Quat, Vec3};

use super::{Axis, Motion};
use crate::interaction::PauseFlag;
use crate::scene::Transform;
use crate::util::frame_timing::FrameClock;

/// Continuous self-rotation about one local axis.
///
/// Angles accumulate without wrapping; the quaternion written to the
/// transform handles periodicity.
#[derive(Debug, Clone)]
pub struct Spin {
    axis: Axis,
    speed: f32,
    angles: Vec3,
    pause: PauseFlag,
}

impl Spin {
    /// Spin about `axis` at `speed` radians per second.
    #[must_use]
    pub fn new(axis: Axis, speed: f32) -> Self {
        Self {
            axis,
            speed,
            angles: Vec3::ZERO,
            pause: PauseFlag::new(),
        }
    }

    /// Share a pause flag owned by an enclosing interaction wrapper.
    #[must_use]
    pub fn with_pause(mut self, pause: PauseFlag) -> Self {
        self.pause = pause;
        self
    }

    /// Axis being spun about.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Accumulated angle about the spin axis.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angles[self.axis.index()]
    }

    /// Accumulated XYZ Euler angles.
    #[must_use]
    pub fn angles(&self) -> Vec3 {
        self.angles
    }

    /// Rotation for the accumulated angles (XYZ order).
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.angles.x,
            self.angles.y,
            self.angles.z,
        )
    }
}

impl Motion for Spin {
    fn apply(&mut self, clock: FrameClock, transform: &mut Transform) {
        if self.pause.is_paused() {
            return;
        }
        self.angles[self.axis.index()] += clock.delta * self.speed;
        transform.rotation = self.rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_is_exact_sum_of_unpaused_steps() {
        let pause = PauseFlag::new();
        let mut spin = Spin::new(Axis::Z, 1.3).with_pause(pause.clone());
        let mut t = Transform::new();
        let mut expected = 0.0_f32;
        let deltas = [0.016, 0.017, 0.0, 0.5, 0.033, 0.016, 0.1, 0.02];
        for (i, &delta) in deltas.iter().enumerate() {
            let paused = i % 3 == 1;
            pause.set(paused);
            spin.apply(FrameClock::new(0.0, delta), &mut t);
            if !paused {
                expected += delta * 1.3;
            }
        }
        assert_eq!(spin.angle(), expected);
        assert_eq!(spin.angles().x, 0.0);
        assert_eq!(spin.angles().y, 0.0);
    }

    #[test]
    fn writes_rotation_about_axis() {
        let mut spin = Spin::new(Axis::Y, 1.0);
        let mut t = Transform::new();
        spin.apply(FrameClock::new(0.0, std::f32::consts::PI), &mut t);
        assert!(t.forward().abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn no_wraparound() {
        let mut spin = Spin::new(Axis::X, 10.0);
        let mut t = Transform::new();
        for _ in 0..10 {
            spin.apply(FrameClock::new(0.0, 1.0), &mut t);
        }
        assert_eq!(spin.angle(), 100.0);
    }
}
