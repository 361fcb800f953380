use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lighting::LightConfig;
use crate::util::Color;

/// A light at a fixed position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct StaticLightOptions {
    /// Light parameters.
    pub light: LightConfig,
    /// World position.
    pub position: [f32; 3],
    /// Attach a debug marker.
    pub helper: bool,
}

impl Default for StaticLightOptions {
    fn default() -> Self {
        Self {
            light: LightConfig::directional(Color::WHITE, 1.0).with_shadow(true),
            position: [0.0, 5.0, 0.0],
            helper: true,
        }
    }
}

/// A light orbiting a target while bobbing vertically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct FloatingLightOptions {
    /// Light parameters.
    pub light: LightConfig,
    /// Point orbited around.
    pub target: [f32; 3],
    /// Orbit radius.
    pub orbit_radius: f32,
    /// Orbit speed in radians per second.
    pub orbit_speed: f32,
    /// Base height above the target.
    pub height: f32,
    /// Vertical bob amplitude.
    pub vertical_amp: f32,
    /// Attach a debug marker.
    pub helper: bool,
}

impl Default for FloatingLightOptions {
    fn default() -> Self {
        Self {
            light: LightConfig::point(Color([1.0, 221.0 / 255.0, 170.0 / 255.0]), 2.0)
                .with_falloff(10.0, 2.0),
            target: [0.0; 3],
            orbit_radius: 2.0,
            orbit_speed: 0.5,
            height: 1.0,
            vertical_amp: 0.25,
            helper: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Scene lights outside the interactive object.
pub struct LightingOptions {
    /// Fixed key lights.
    #[schemars(skip)]
    pub fixed: Vec<StaticLightOptions>,
    /// Floating lights.
    #[schemars(skip)]
    pub floating: Vec<FloatingLightOptions>,
    /// Multiplier applied to every fixed and floating light's intensity.
    #[schemars(title = "Light Scale", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub intensity_scale: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            fixed: vec![StaticLightOptions {
                light: LightConfig::directional(Color::WHITE, 1.5)
                    .with_shadow(true),
                position: [-3.0, -1.0, 1.0],
                helper: true,
            }],
            floating: vec![FloatingLightOptions {
                light: LightConfig::point(Color::CYAN, 30.0)
                    .with_falloff(10.0, 2.0),
                target: [0.0, 1.0, 0.0],
                orbit_radius: 3.0,
                orbit_speed: 0.9,
                height: 1.2,
                ..FloatingLightOptions::default()
            }],
            intensity_scale: 1.0,
        }
    }
}
