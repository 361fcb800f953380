use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::interaction::clickable::DEFAULT_OUTLINE_THICKNESS;
use crate::motion::orbit::DEFAULT_ORBIT_BOB;
use crate::motion::Axis;
use crate::util::Color;

/// Orbit wrapper parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct OrbiterOptions {
    /// Point orbited around.
    pub target: [f32; 3],
    /// Orbit radius.
    pub radius: f32,
    /// Angular speed in radians per second.
    pub speed: f32,
    /// Whether to bob vertically.
    pub bob: bool,
    /// Bob amplitude.
    pub bob_amplitude: f32,
}

impl Default for OrbiterOptions {
    fn default() -> Self {
        Self {
            target: [0.0; 3],
            radius: 3.0,
            speed: 0.5,
            bob: false,
            bob_amplitude: DEFAULT_ORBIT_BOB,
        }
    }
}

/// Self-rotation wrapper parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct RotatorOptions {
    /// Axis to spin about.
    pub axis: Axis,
    /// Radians per second.
    pub speed: f32,
}

impl Default for RotatorOptions {
    fn default() -> Self {
        Self {
            axis: Axis::Y,
            speed: 1.0,
        }
    }
}

/// Point light shown above the object while hovered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct HoverLightOptions {
    /// Whether the hover light is mounted.
    pub enabled: bool,
    /// Light color.
    pub color: Color,
    /// Light intensity.
    pub intensity: f32,
    /// Falloff distance.
    pub distance: f32,
    /// Offset from the wrapped subtree's origin.
    pub offset: [f32; 3],
}

impl Default for HoverLightOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Color::WHITE,
            intensity: 18.0,
            distance: 3.0,
            offset: [0.0, 1.0, 0.0],
        }
    }
}

/// Ring of spot lights orbiting the object while hovered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct OrbitRigOptions {
    /// Whether the rig is mounted.
    pub enabled: bool,
    /// Number of lights.
    pub num_lights: usize,
    /// Orbit radius.
    pub radius: f32,
    /// Light intensity.
    pub intensity: f32,
    /// Base orbit speed; each light scales it by its own factor.
    pub speed: f32,
    /// Colors lights are drawn from.
    pub palette: Vec<Color>,
    /// Spot cone half-angle in radians.
    pub angle: f32,
    /// Spot penumbra.
    pub penumbra: f32,
    /// Attach debug markers to each light.
    pub show_helpers: bool,
    /// Seed for the per-light axes, phases, colors and speeds.
    pub seed: u64,
}

impl Default for OrbitRigOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            num_lights: 6,
            radius: 2.0,
            intensity: 8.0,
            speed: 0.6,
            palette: vec![
                Color::CYAN,
                Color([1.0, 0.4, 1.0]),
                Color([1.0, 0.6, 0.4]),
                Color([0.6, 1.0, 0.4]),
            ],
            angle: 0.4,
            penumbra: 0.6,
            show_helpers: true,
            seed: 0x5EED,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interactive Object", inline)]
#[serde(default)]
/// The clickable, orbiting model with a tooltip.
pub struct InteractiveOptions {
    /// Whether the interactive object is mounted.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Model asset path.
    #[schemars(skip)]
    pub model: String,
    /// Model scale.
    #[schemars(title = "Model Scale", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub model_scale: f32,
    /// Tooltip text; empty disables the tooltip.
    #[schemars(skip)]
    pub tooltip: String,
    /// URL opened on click; empty means no link.
    #[schemars(skip)]
    pub link: String,
    /// Browsing context for the link.
    #[schemars(skip)]
    pub link_target: String,
    /// Hover outline color.
    #[schemars(skip)]
    pub outline_color: Color,
    /// Hover outline thickness; zero disables the outline.
    #[schemars(title = "Outline", range(min = 0.0, max = 0.1), extend("step" = 0.005))]
    pub outline_thickness: f32,
    /// Orbit wrapper.
    #[schemars(skip)]
    pub orbit: OrbiterOptions,
    /// Rotators, outermost first.
    #[schemars(skip)]
    pub rotators: Vec<RotatorOptions>,
    /// Optional hover light.
    #[schemars(skip)]
    pub hover_light: HoverLightOptions,
    /// Optional orbiting light rig.
    #[schemars(skip)]
    pub orbit_lights: OrbitRigOptions,
}

impl Default for InteractiveOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "/models/rock_1.glb".to_owned(),
            model_scale: 0.8,
            tooltip: "Visit LinkedIn".to_owned(),
            link: "https://www.linkedin.com/in/shaheerulislam/".to_owned(),
            link_target: "_blank".to_owned(),
            outline_color: Color::CYAN,
            outline_thickness: DEFAULT_OUTLINE_THICKNESS,
            orbit: OrbiterOptions {
                speed: 0.3,
                bob: true,
                ..OrbiterOptions::default()
            },
            rotators: vec![
                RotatorOptions {
                    axis: Axis::Z,
                    speed: 1.0,
                },
                RotatorOptions {
                    axis: Axis::X,
                    speed: 1.0,
                },
            ],
            hover_light: HoverLightOptions::default(),
            orbit_lights: OrbitRigOptions::default(),
        }
    }
}

/// Bright disc that eases toward the pointer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct MouseCircleOptions {
    /// Whether the circle is mounted.
    pub enabled: bool,
    /// Disc radius.
    pub radius: f32,
    /// Edge segments.
    pub segments: u32,
    /// Fill color.
    pub color: Color,
    /// World-space half extents reached at the viewport edges.
    pub bounds: [f32; 2],
    /// Fraction of the remaining distance covered per frame.
    pub smoothing: f32,
    /// Starting position.
    pub position: [f32; 3],
}

impl Default for MouseCircleOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 0.8,
            segments: 64,
            color: Color::WHITE,
            bounds: [5.0, 3.0],
            smoothing: 0.05,
            position: [0.0; 3],
        }
    }
}
