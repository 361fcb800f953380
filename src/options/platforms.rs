use glam::{EulerRot, Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::motion::FloatMotion;
use crate::scene::Transform;

/// A model placed in the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct PlatformOptions {
    /// Model asset path.
    pub path: String,
    /// World position.
    pub position: [f32; 3],
    /// XYZ Euler rotation in radians.
    pub rotation: [f32; 3],
    /// Uniform scale.
    pub scale: f32,
    /// Meshes cast shadows.
    pub cast_shadow: bool,
    /// Meshes receive shadows.
    pub receive_shadow: bool,
}

impl Default for PlatformOptions {
    fn default() -> Self {
        Self {
            path: "/assets/model.glb".to_owned(),
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: 1.0,
            cast_shadow: true,
            receive_shadow: true,
        }
    }
}

impl PlatformOptions {
    /// Platform at the origin with the given path and scale.
    pub fn at_origin(path: impl Into<String>, scale: f32) -> Self {
        Self {
            path: path.into(),
            scale,
            ..Self::default()
        }
    }

    /// Local transform described by these options.
    #[must_use]
    pub fn transform(&self) -> Transform {
        let [x, y, z] = self.rotation;
        Transform::new()
            .with_position(Vec3::from(self.position))
            .with_rotation(Quat::from_euler(EulerRot::XYZ, x, y, z))
            .with_scale(self.scale)
    }
}

/// A model drifting in place: orbit, bob and spin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct FloatingPlatformOptions {
    /// Model placement; `position` is the rest position.
    pub platform: PlatformOptions,
    /// Global multiplier on orbit, bob and spin rates.
    pub speed: f32,
    /// Y spin in radians per second.
    pub rotate_speed: f32,
    /// Whether the model bobs.
    pub bob: bool,
    /// Bob direction.
    pub direction: [f32; 3],
    /// Bob amplitude.
    pub bob_intensity: f32,
    /// Whether the model orbits `target`.
    pub orbit: bool,
    /// Orbit center.
    pub target: [f32; 3],
    /// Orbit radius.
    pub orbit_radius: f32,
    /// Orbit speed in radians per second.
    pub orbit_speed: f32,
}

impl Default for FloatingPlatformOptions {
    fn default() -> Self {
        Self {
            platform: PlatformOptions::default(),
            speed: 1.0,
            rotate_speed: 0.5,
            bob: true,
            direction: [0.0, 1.0, 0.0],
            bob_intensity: 0.1,
            orbit: true,
            target: [0.0; 3],
            orbit_radius: 2.0,
            orbit_speed: 0.5,
        }
    }
}

impl FloatingPlatformOptions {
    /// Motion described by these options.
    #[must_use]
    pub fn motion(&self) -> FloatMotion {
        let mut motion = FloatMotion::new(
            Vec3::from(self.platform.position),
            self.rotate_speed,
            self.speed,
        )
        .with_rotation(Vec3::from(self.platform.rotation));
        if self.orbit {
            motion = motion.with_orbit(
                Vec3::from(self.target),
                self.orbit_radius,
                self.orbit_speed,
            );
        }
        if self.bob {
            motion =
                motion.with_bob(Vec3::from(self.direction), self.bob_intensity);
        }
        motion
    }
}
