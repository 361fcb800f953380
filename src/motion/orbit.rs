use glam::Vec3;

use super::Motion;
use crate::interaction::PauseFlag;
use crate::scene::Transform;
use crate::util::frame_timing::FrameClock;

/// Bob amplitude used when an orbit enables bobbing without a value.
pub const DEFAULT_ORBIT_BOB: f32 = 0.2;

/// Circular path in the XZ plane around a target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Point orbited around.
    pub target: Vec3,
    /// Distance from the target in the XZ plane.
    pub radius: f32,
    /// Angular speed in radians per second.
    pub speed: f32,
    /// Accumulated angle in radians.
    pub angle: f32,
}

impl OrbitState {
    /// Orbit starting at angle zero (on the target's +X side).
    #[must_use]
    pub const fn new(target: Vec3, radius: f32, speed: f32) -> Self {
        Self {
            target,
            radius,
            speed,
            angle: 0.0,
        }
    }

    /// Advance the angle by `delta * speed`.
    pub fn advance(&mut self, delta: f32) {
        self.angle += delta * self.speed;
    }

    /// Point on the circle at the current angle, at the target's height.
    #[must_use]
    pub fn point(&self) -> Vec3 {
        self.point_at(self.angle)
    }

    /// Point on the circle at an arbitrary angle, at the target's height.
    #[must_use]
    pub fn point_at(&self, angle: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(
            self.target.x + cos * self.radius,
            self.target.y,
            self.target.z + sin * self.radius,
        )
    }
}

/// Orbit motion with optional vertical bob and pause support.
///
/// While the pause flag is raised the node freezes in place; the angle
/// resumes from where it stopped.
#[derive(Debug, Clone)]
pub struct Orbit {
    state: OrbitState,
    bob: Option<f32>,
    pause: PauseFlag,
}

impl Orbit {
    /// Orbit around `target` at `radius`, `speed` radians per second.
    #[must_use]
    pub fn new(target: Vec3, radius: f32, speed: f32) -> Self {
        Self {
            state: OrbitState::new(target, radius, speed),
            bob: None,
            pause: PauseFlag::new(),
        }
    }

    /// Add a vertical bob of `sin(t * 2) * amplitude`.
    #[must_use]
    pub fn with_bob(mut self, amplitude: f32) -> Self {
        self.bob = Some(amplitude);
        self
    }

    /// Share a pause flag owned by an enclosing interaction wrapper.
    #[must_use]
    pub fn with_pause(mut self, pause: PauseFlag) -> Self {
        self.pause = pause;
        self
    }

    /// Current orbit state.
    #[must_use]
    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    /// Mutable orbit state, for jumping to a given angle.
    pub fn state_mut(&mut self) -> &mut OrbitState {
        &mut self.state
    }

    /// Whether the shared pause flag is currently raised.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    /// Position at the current angle for elapsed time `elapsed`.
    #[must_use]
    pub fn position(&self, elapsed: f32) -> Vec3 {
        let mut p = self.state.point();
        if let Some(amplitude) = self.bob {
            p.y += (elapsed * 2.0).sin() * amplitude;
        }
        p
    }
}

impl Motion for Orbit {
    fn apply(&mut self, clock: FrameClock, transform: &mut Transform) {
        if self.pause.is_paused() {
            return;
        }
        self.state.advance(clock.delta);
        transform.position = self.position(clock.elapsed);
        let _ = transform.look_at(self.state.target);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn starts_on_positive_x_side() {
        let mut orbit = Orbit::new(Vec3::ZERO, 3.0, 0.3);
        let mut t = Transform::new();
        orbit.apply(FrameClock::new(0.0, 0.0), &mut t);
        assert!(close(t.position, Vec3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn quarter_turn_reaches_positive_z() {
        let mut orbit = Orbit::new(Vec3::ZERO, 3.0, 0.3);
        let mut t = Transform::new();
        // pi/2 of angle at 0.3 rad/s
        let delta = FRAC_PI_2 / 0.3;
        orbit.apply(FrameClock::new(delta, delta), &mut t);
        assert!((orbit.state().angle - FRAC_PI_2).abs() < 1e-6);
        assert!(close(t.position, Vec3::new(0.0, 0.0, 3.0)));
    }

    #[test]
    fn distance_to_target_equals_radius() {
        let target = Vec3::new(1.5, -2.0, 4.0);
        let mut orbit = Orbit::new(target, 2.5, 0.7).with_bob(0.2);
        let mut t = Transform::new();
        let mut elapsed = 0.0;
        for i in 0..500 {
            let delta = 0.001 + (i % 7) as f32 * 0.01;
            elapsed += delta;
            orbit.apply(FrameClock::new(elapsed, delta), &mut t);
            let xz = (t.position - target) * Vec3::new(1.0, 0.0, 1.0);
            assert!((xz.length() - 2.5).abs() < 1e-4, "tick {i}: {xz}");
        }
    }

    #[test]
    fn faces_target_every_tick() {
        let mut orbit = Orbit::new(Vec3::ZERO, 3.0, 1.0);
        let mut t = Transform::new();
        for step in 1..20 {
            let e = step as f32 * 0.1;
            orbit.apply(FrameClock::new(e, 0.1), &mut t);
            let expected = (-t.position).normalize();
            assert!(close(t.forward(), expected));
        }
    }

    #[test]
    fn pause_freezes_position_and_angle() {
        let pause = PauseFlag::new();
        let mut orbit =
            Orbit::new(Vec3::ZERO, 3.0, 1.0).with_pause(pause.clone());
        let mut t = Transform::new();
        orbit.apply(FrameClock::new(0.5, 0.5), &mut t);
        let frozen = t;
        let angle = orbit.state().angle;

        pause.set(true);
        for step in 0..10 {
            let e = 0.6 + step as f32 * 0.1;
            orbit.apply(FrameClock::new(e, 0.1), &mut t);
        }
        assert_eq!(t, frozen);
        assert_eq!(orbit.state().angle, angle);

        pause.set(false);
        orbit.apply(FrameClock::new(2.0, 0.1), &mut t);
        assert!((orbit.state().angle - (angle + 0.1)).abs() < 1e-6);
    }

    #[test]
    fn zero_radius_sits_on_target() {
        let target = Vec3::new(0.0, 1.0, 0.0);
        let mut orbit = Orbit::new(target, 0.0, 2.0);
        let mut t = Transform::new();
        orbit.apply(FrameClock::new(1.0, 1.0), &mut t);
        assert!(close(t.position, target));
        assert!(t.rotation.is_finite());
    }

    #[test]
    fn bob_rides_on_elapsed_time() {
        let mut orbit = Orbit::new(Vec3::ZERO, 1.0, 0.0).with_bob(0.2);
        let mut t = Transform::new();
        let e = std::f32::consts::FRAC_PI_4;
        orbit.apply(FrameClock::new(e, 0.0), &mut t);
        assert!((t.position.y - 0.2).abs() < 1e-6);
    }
}
