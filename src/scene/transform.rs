//! Position, rotation and scale of a scene node.

use glam::{Mat3, Mat4, Quat, Vec3};

/// Local transform of one scene node.
///
/// Each transform has exactly one owner, and that owner is the only writer
/// during a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position relative to the parent node.
    pub position: Vec3,
    /// Rotation relative to the parent node.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Identity transform at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Same transform with a different position.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Same transform with a different rotation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Same transform with a uniform scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Local-to-parent matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.position,
        )
    }

    /// Direction the node's local +Z axis points in parent space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Rotate so the local +Z axis points at `target`, keeping +Y as close
    /// to world up as possible.
    ///
    /// Returns `false` and leaves the rotation alone when `target`
    /// coincides with the position.
    pub fn look_at(&mut self, target: Vec3) -> bool {
        let Some(z) = (target - self.position).try_normalize() else {
            return false;
        };
        // Straight up or down: world up is parallel, borrow +Z instead.
        let x = Vec3::Y
            .cross(z)
            .try_normalize()
            .or_else(|| Vec3::Z.cross(z).try_normalize())
            .unwrap_or(Vec3::X);
        let y = z.cross(x);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn look_at_points_forward_axis_at_target() {
        let mut t = Transform::new().with_position(Vec3::new(3.0, 0.0, 0.0));
        assert!(t.look_at(Vec3::ZERO));
        assert!(close(t.forward(), Vec3::NEG_X));
    }

    #[test]
    fn look_at_keeps_up_vector_level() {
        let mut t = Transform::new().with_position(Vec3::new(1.0, 2.0, -4.0));
        assert!(t.look_at(Vec3::new(0.0, 1.0, 0.0)));
        let up = t.rotation * Vec3::Y;
        let right = t.rotation * Vec3::X;
        assert!(right.y.abs() < 1e-5, "roll introduced: {right}");
        assert!(up.y > 0.0);
    }

    #[test]
    fn look_at_straight_down_is_finite() {
        let mut t = Transform::new().with_position(Vec3::new(0.0, 5.0, 0.0));
        assert!(t.look_at(Vec3::ZERO));
        assert!(t.rotation.is_finite());
        assert!(close(t.forward(), Vec3::NEG_Y));
    }

    #[test]
    fn look_at_self_is_noop() {
        let mut t = Transform::new().with_rotation(Quat::from_rotation_y(1.0));
        let before = t.rotation;
        assert!(!t.look_at(Vec3::ZERO));
        assert_eq!(t.rotation, before);
    }

    #[test]
    fn matrix_applies_scale_then_translation() {
        let t = Transform::new()
            .with_position(Vec3::new(1.0, 0.0, 0.0))
            .with_scale(2.0);
        let p = t.matrix().transform_point3(Vec3::Y);
        assert!(close(p, Vec3::new(1.0, 2.0, 0.0)));
    }
}
