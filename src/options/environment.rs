use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::Color;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Environment", inline)]
#[serde(default)]
/// Image-based lighting, background and ambient light.
pub struct EnvironmentOptions {
    /// Equirectangular HDRI path; empty disables the environment map.
    #[schemars(skip)]
    pub hdri: String,
    /// Environment lighting strength.
    #[schemars(title = "HDRI Intensity", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub intensity: f32,
    /// Whether the HDRI is also drawn as the background.
    #[schemars(title = "HDRI Background")]
    pub as_background: bool,
    /// Clear color used when there is no HDRI background.
    #[schemars(skip)]
    pub background: Color,
    /// Ambient light color.
    #[schemars(skip)]
    pub ambient_color: Color,
    /// Ambient light strength.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient_intensity: f32,
}

impl Default for EnvironmentOptions {
    fn default() -> Self {
        Self {
            hdri: "/hdri/space8k2.exr".to_owned(),
            intensity: 0.1,
            as_background: true,
            background: Color([0.0, 0.0, 0.0]),
            ambient_color: Color::WHITE,
            ambient_intensity: 0.3,
        }
    }
}
