use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::Color;

/// Kind of light and its kind-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightKind {
    /// Omnidirectional light at a point.
    Point,
    /// Cone light aimed along the node's +Z axis.
    Spot {
        /// Half-angle of the cone in radians.
        angle: f32,
        /// Fraction of the cone that fades at the edge, `0..=1`.
        penumbra: f32,
    },
    /// Parallel light shining along the node's +Z axis.
    Directional,
}

impl LightKind {
    /// Default spot cone: 30 degrees, 0.4 penumbra.
    pub const SPOT: Self = Self::Spot {
        angle: std::f32::consts::FRAC_PI_6,
        penumbra: 0.4,
    };

    /// Whether the light's orientation matters and it should be aimed.
    #[must_use]
    pub const fn is_aimed(self) -> bool {
        !matches!(self, Self::Point)
    }
}

/// Photometric parameters the engine needs to instantiate a light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LightConfig {
    /// Light kind.
    pub kind: LightKind,
    /// Light color.
    pub color: Color,
    /// Intensity in engine units.
    pub intensity: f32,
    /// Cutoff distance; 0 means unlimited.
    pub distance: f32,
    /// Physical falloff exponent.
    pub decay: f32,
    /// Whether the light casts shadows.
    pub cast_shadow: bool,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            kind: LightKind::Point,
            color: Color::WHITE,
            intensity: 1.0,
            distance: 0.0,
            decay: 2.0,
            cast_shadow: false,
        }
    }
}

impl LightConfig {
    /// Point light.
    #[must_use]
    pub fn point(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            ..Self::default()
        }
    }

    /// Spot light with the given cone.
    #[must_use]
    pub fn spot(color: Color, intensity: f32, angle: f32, penumbra: f32) -> Self {
        Self {
            kind: LightKind::Spot { angle, penumbra },
            color,
            intensity,
            ..Self::default()
        }
    }

    /// Directional light.
    #[must_use]
    pub fn directional(color: Color, intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional,
            color,
            intensity,
            ..Self::default()
        }
    }

    /// Same light with a falloff distance and decay.
    #[must_use]
    pub fn with_falloff(mut self, distance: f32, decay: f32) -> Self {
        self.distance = distance;
        self.decay = decay;
        self
    }

    /// Same light with shadow casting toggled.
    #[must_use]
    pub fn with_shadow(mut self, cast_shadow: bool) -> Self {
        self.cast_shadow = cast_shadow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_tagged_in_toml() {
        let light: LightConfig = toml::from_str(
            r##"
intensity = 8.0
color = "#ff66ff"
kind = { type = "spot", angle = 0.4, penumbra = 0.6 }
"##,
        )
        .unwrap();
        assert_eq!(light.kind, LightKind::Spot { angle: 0.4, penumbra: 0.6 });
        assert_eq!(light.decay, 2.0);
        assert!(light.kind.is_aimed());
    }
}
