use glam::Vec2;

use crate::scene::Transform;

/// Eases a node's XY position toward the pointer.
///
/// The pointer's normalized coordinates are scaled by `bounds` into world
/// units, then each tick covers a fixed fraction `smoothing` of the
/// remaining distance. The result is exponential decay toward the target,
/// not a physical spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseFollow {
    /// World-space half extents reached at the viewport edges.
    pub bounds: Vec2,
    /// Fraction of the remaining distance covered per tick, `0..=1`.
    pub smoothing: f32,
}

impl Default for MouseFollow {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(5.0, 3.0),
            smoothing: 0.05,
        }
    }
}

impl MouseFollow {
    /// Follow within `bounds` at the given smoothing factor (clamped to
    /// `0..=1`).
    #[must_use]
    pub fn new(bounds: Vec2, smoothing: f32) -> Self {
        Self {
            bounds,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// World-space XY target for pointer NDC `ndc`.
    #[must_use]
    pub fn target(&self, ndc: Vec2) -> Vec2 {
        ndc * self.bounds
    }

    /// Move one step toward the pointer. Z is left untouched.
    pub fn apply(&self, ndc: Vec2, transform: &mut Transform) {
        let current = transform.position.truncate();
        let next = current.lerp(self.target(ndc), self.smoothing);
        transform.position.x = next.x;
        transform.position.y = next.y;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn scales_ndc_to_bounds() {
        let follow = MouseFollow::default();
        assert_eq!(follow.target(Vec2::new(1.0, -1.0)), Vec2::new(5.0, -3.0));
    }

    #[test]
    fn converges_geometrically() {
        let follow = MouseFollow::new(Vec2::new(5.0, 3.0), 0.05);
        let ndc = Vec2::new(0.6, -0.4);
        let target = follow.target(ndc);
        let mut t = Transform::new().with_position(Vec3::new(-4.0, 2.0, 1.0));
        let initial = (t.position.truncate() - target).length();

        for n in 1..=200 {
            follow.apply(ndc, &mut t);
            let bound = initial * 0.95_f32.powi(n) + 1e-4;
            let dist = (t.position.truncate() - target).length();
            assert!(dist <= bound, "tick {n}: {dist} > {bound}");
        }
        assert_eq!(t.position.z, 1.0);
    }

    #[test]
    fn full_smoothing_snaps() {
        let follow = MouseFollow::new(Vec2::ONE, 1.5);
        let mut t = Transform::new();
        follow.apply(Vec2::new(0.25, 0.5), &mut t);
        assert!(t.position.abs_diff_eq(Vec3::new(0.25, 0.5, 0.0), 1e-6));
    }
}
