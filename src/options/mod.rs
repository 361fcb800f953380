//! Scene configuration with TOML preset support.
//!
//! Everything the composed portfolio scene reads at startup (camera, bloom,
//! environment, lights, platforms, the interactive object and the mouse
//! circle) lives here. Options serialize to/from TOML so a scene layout can
//! be kept as a preset and partially overridden.

mod bloom;
mod camera;
mod environment;
mod interactive;
mod lighting;
mod platforms;

use std::path::Path;

pub use bloom::BloomOptions;
pub use camera::CameraOptions;
pub use environment::EnvironmentOptions;
pub use interactive::{
    HoverLightOptions, InteractiveOptions, MouseCircleOptions,
    OrbitRigOptions, OrbiterOptions, RotatorOptions,
};
pub use lighting::{FloatingLightOptions, LightingOptions, StaticLightOptions};
pub use platforms::{FloatingPlatformOptions, PlatformOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[bloom]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct SceneOptions {
    /// Camera projection and placement.
    pub camera: CameraOptions,
    /// Bloom post-processing.
    pub bloom: BloomOptions,
    /// HDRI, background and ambient light.
    pub environment: EnvironmentOptions,
    /// Fixed and floating lights.
    pub lighting: LightingOptions,
    /// Static models.
    #[schemars(skip)]
    pub platforms: Vec<PlatformOptions>,
    /// Drifting models.
    #[schemars(skip)]
    pub floating_platforms: Vec<FloatingPlatformOptions>,
    /// The clickable orbiting object.
    pub interactive: InteractiveOptions,
    /// Pointer-following disc.
    #[schemars(skip)]
    pub mouse_circle: MouseCircleOptions,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            camera: CameraOptions::default(),
            bloom: BloomOptions::default(),
            environment: EnvironmentOptions::default(),
            lighting: LightingOptions::default(),
            platforms: vec![
                PlatformOptions::at_origin("/models/main_1.glb", 1.0),
                PlatformOptions::at_origin("/models/station.glb", 1.0),
                PlatformOptions::at_origin("/models/man_1.glb", 1.0),
                PlatformOptions::at_origin("/models/p1.glb", 1.2),
            ],
            floating_platforms: Vec::new(),
            interactive: InteractiveOptions::default(),
            mouse_circle: MouseCircleOptions::default(),
        }
    }
}

impl SceneOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(SceneOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path).map_err(SceneError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, SceneError> {
        toml::from_str(content)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SceneError::Io)?;
        }
        std::fs::write(path, content).map_err(SceneError::Io)
    }

    /// Scene presets (`*.toml` file stems) in `dir`, sorted. A missing or
    /// unreadable directory has no presets.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| {
                path.file_stem().and_then(|s| s.to_str()).map(str::to_owned)
            })
            .collect();
        names.sort();
        names
    }

    /// Load the preset `name` from `dir`.
    pub fn load_preset(dir: &Path, name: &str) -> Result<Self, SceneError> {
        Self::load(&dir.join(format!("{name}.toml")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::LightKind;
    use crate::motion::Axis;
    use crate::util::Color;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = SceneOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: SceneOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[bloom]
intensity = 0.5

[interactive.orbit]
radius = 4.0
";
        let opts = SceneOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.bloom.intensity, 0.5);
        assert_eq!(opts.interactive.orbit.radius, 4.0);
        // Everything else should be default
        assert_eq!(opts.bloom.luminance_threshold, 0.2);
        assert_eq!(opts.interactive.orbit.speed, 0.3);
        assert!(opts.interactive.orbit.bob);
        assert_eq!(opts.camera.fov, 50.0);
        assert_eq!(opts.platforms.len(), 4);
    }

    #[test]
    fn defaults_describe_the_portfolio_scene() {
        let opts = SceneOptions::default();
        assert_eq!(opts.camera.position, [0.0, 2.0, 5.0]);
        assert_eq!(opts.environment.hdri, "/hdri/space8k2.exr");
        assert_eq!(opts.environment.ambient_intensity, 0.3);
        assert_eq!(opts.platforms[3].path, "/models/p1.glb");
        assert_eq!(opts.platforms[3].scale, 1.2);

        let key = &opts.lighting.fixed[0];
        assert_eq!(key.light.kind, LightKind::Directional);
        assert_eq!(key.light.intensity, 1.5);
        assert_eq!(key.position, [-3.0, -1.0, 1.0]);

        let floating = &opts.lighting.floating[0];
        assert_eq!(floating.light.color, Color::CYAN);
        assert_eq!(floating.orbit_radius, 3.0);
        assert_eq!(floating.target, [0.0, 1.0, 0.0]);

        let rock = &opts.interactive;
        assert_eq!(rock.tooltip, "Visit LinkedIn");
        assert_eq!(rock.link_target, "_blank");
        let axes: Vec<Axis> = rock.rotators.iter().map(|r| r.axis).collect();
        assert_eq!(axes, vec![Axis::Z, Axis::X]);
    }

    #[test]
    fn light_kind_parses_from_tagged_table() {
        let toml_str = r#"
[[lighting.fixed]]
position = [1.0, 2.0, 3.0]

[lighting.fixed.light]
intensity = 4.0

[lighting.fixed.light.kind]
type = "spot"
angle = 0.3
penumbra = 0.5
"#;
        let opts = SceneOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.lighting.fixed.len(), 1);
        let light = &opts.lighting.fixed[0].light;
        assert_eq!(light.intensity, 4.0);
        assert_eq!(
            light.kind,
            LightKind::Spot {
                angle: 0.3,
                penumbra: 0.5
            }
        );
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = SceneOptions::from_toml("[bloom\nintensity = ").unwrap_err();
        assert!(matches!(err, SceneError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("starfolio-presets-{}", std::process::id()));
        let mut opts = SceneOptions::default();
        opts.bloom.intensity = 0.75;
        opts.save(&dir.join("night.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = SceneOptions::load(&dir.join("night.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(SceneOptions::list_presets(&dir), vec!["night".to_owned()]);
        assert_eq!(SceneOptions::load_preset(&dir, "night").unwrap(), opts);
        assert!(matches!(
            SceneOptions::load_preset(&dir, "dawn"),
            Err(SceneError::Io(_))
        ));
        assert!(SceneOptions::list_presets(&dir.join("missing")).is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(SceneOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("bloom"));
        assert!(props.contains_key("environment"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("interactive"));

        // Skipped sections should be absent
        assert!(!props.contains_key("platforms"));
        assert!(!props.contains_key("mouse_circle"));

        let bloom = &props["bloom"]["properties"];
        assert!(bloom.get("intensity").is_some());
        assert!(bloom.get("mipmap_blur").is_none());
    }
}
