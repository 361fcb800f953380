use glam::{EulerRot, Quat, Vec3};

use super::{Bob, Motion, OrbitState};
use crate::scene::Transform;
use crate::util::frame_timing::FrameClock;

/// Combined drift for a floating model: an optional time-driven orbit, an
/// optional bob, and a steady spin added to the Y Euler angle of the
/// rest rotation.
///
/// `speed` scales all three. Unlike [`Orbit`](super::Orbit) the orbit angle
/// is a pure function of elapsed time, so a floating model cannot be
/// paused.
#[derive(Debug, Clone)]
pub struct FloatMotion {
    base: Vec3,
    rotation: Vec3,
    orbit: Option<OrbitState>,
    bob: Option<Bob>,
    rotate_speed: f32,
    speed: f32,
    spin: f32,
}

impl FloatMotion {
    /// Rest at `base`, no orbit, no bob, spinning at `rotate_speed`.
    #[must_use]
    pub fn new(base: Vec3, rotate_speed: f32, speed: f32) -> Self {
        Self {
            base,
            rotation: Vec3::ZERO,
            orbit: None,
            bob: None,
            rotate_speed,
            speed,
            spin: 0.0,
        }
    }

    /// Rest rotation as XYZ Euler angles in radians. The spin adds to Y.
    #[must_use]
    pub fn with_rotation(mut self, euler: Vec3) -> Self {
        self.rotation = euler;
        self
    }

    /// Orbit `target` at `radius`; the height stays at the base height.
    #[must_use]
    pub fn with_orbit(mut self, target: Vec3, radius: f32, orbit_speed: f32) -> Self {
        self.orbit = Some(OrbitState::new(target, radius, orbit_speed));
        self
    }

    /// Bob along `direction` by `intensity` at `2 * speed` rad/s.
    #[must_use]
    pub fn with_bob(mut self, direction: Vec3, intensity: f32) -> Self {
        self.bob = Some(Bob::new(direction, intensity, 2.0 * self.speed));
        self
    }

    /// Accumulated Y spin in radians.
    #[must_use]
    pub fn spin(&self) -> f32 {
        self.spin
    }

    /// Rotation after the accumulated spin.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        let r = self.rotation;
        Quat::from_euler(EulerRot::XYZ, r.x, r.y + self.spin, r.z)
    }

    /// Position at elapsed time `elapsed`, before spin.
    #[must_use]
    pub fn position(&self, elapsed: f32) -> Vec3 {
        let mut p = match &self.orbit {
            Some(orbit) => {
                let mut p = orbit.point_at(elapsed * orbit.speed * self.speed);
                p.y = self.base.y;
                p
            }
            None => self.base,
        };
        if let Some(bob) = &self.bob {
            p += bob.displacement(elapsed);
        }
        p
    }
}

impl Motion for FloatMotion {
    fn apply(&mut self, clock: FrameClock, transform: &mut Transform) {
        transform.position = self.position(clock.elapsed);
        self.spin += clock.delta * self.rotate_speed * self.speed;
        transform.rotation = self.rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rests_at_base_without_orbit_or_bob() {
        let base = Vec3::new(1.0, 2.0, 3.0);
        let mut motion = FloatMotion::new(base, 0.5, 1.0);
        let mut t = Transform::new();
        for step in 1..50 {
            motion.apply(FrameClock::new(step as f32 * 0.1, 0.1), &mut t);
        }
        assert_eq!(t.position, base);
    }

    #[test]
    fn bob_does_not_accumulate_between_ticks() {
        let base = Vec3::new(0.0, 1.0, 0.0);
        let mut motion =
            FloatMotion::new(base, 0.0, 1.0).with_bob(Vec3::Y, 0.1);
        let mut t = Transform::new();
        for step in 0..200 {
            let e = step as f32 * 0.05;
            motion.apply(FrameClock::new(e, 0.05), &mut t);
            assert!((t.position.y - base.y).abs() <= 0.1 + 1e-6);
        }
    }

    #[test]
    fn orbit_keeps_base_height_and_radius() {
        let mut motion = FloatMotion::new(Vec3::new(0.0, 0.7, 0.0), 0.5, 2.0)
            .with_orbit(Vec3::new(1.0, 5.0, 1.0), 2.0, 0.5);
        let mut t = Transform::new();
        motion.apply(FrameClock::new(3.0, 0.1), &mut t);
        assert_eq!(t.position.y, 0.7);
        let xz = Vec3::new(t.position.x - 1.0, 0.0, t.position.z - 1.0);
        assert!((xz.length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn spin_scales_with_speed() {
        let mut motion = FloatMotion::new(Vec3::ZERO, 0.5, 2.0);
        let mut t = Transform::new();
        motion.apply(FrameClock::new(1.0, 1.0), &mut t);
        assert_eq!(motion.spin(), 1.0);
    }

    #[test]
    fn spin_keeps_the_rest_tilt() {
        let tilt = Vec3::new(1.0, 0.0, 0.5);
        let mut motion =
            FloatMotion::new(Vec3::ZERO, 0.5, 1.0).with_rotation(tilt);
        let mut t = Transform::new();
        motion.apply(FrameClock::new(0.05, 0.05), &mut t);
        let expected = Quat::from_euler(EulerRot::XYZ, 1.0, 0.025, 0.5);
        assert!(t.rotation.abs_diff_eq(expected, 1e-6));
    }
}
