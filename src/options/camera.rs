use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and placement.
pub struct CameraOptions {
    /// Eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fov: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far: f32,
    /// Whether the orbit-controls rig is enabled.
    #[schemars(title = "Orbit Controls")]
    pub orbit_controls: bool,
    /// Whether shadow maps are rendered.
    #[schemars(title = "Shadows")]
    pub shadows: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 2.0, 5.0],
            fov: 50.0,
            near: 0.01,
            far: 1000.0,
            orbit_controls: true,
            shadows: true,
        }
    }
}
