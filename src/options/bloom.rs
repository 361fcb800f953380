use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bloom", inline)]
#[serde(default)]
/// Bloom post-processing parameters.
pub struct BloomOptions {
    /// Whether the bloom pass runs at all.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Luminance above which pixels glow.
    #[schemars(title = "Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub luminance_threshold: f32,
    /// Width of the soft knee around the threshold.
    #[schemars(title = "Smoothing", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub luminance_smoothing: f32,
    /// Glow strength.
    #[schemars(title = "Intensity", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub intensity: f32,
    /// Blur through the mip chain for a softer glow.
    #[schemars(skip)]
    pub mipmap_blur: bool,
}

impl Default for BloomOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            luminance_threshold: 0.2,
            luminance_smoothing: 0.9,
            intensity: 1.5,
            mipmap_blur: true,
        }
    }
}
