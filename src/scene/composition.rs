//! Assembles the portfolio scene from [`SceneOptions`].

use glam::Vec3;

use super::engine::{Outline, SceneEngine};
use super::nodes::{FloatingPlatform, Model, MouseCircle, Orbiter, Rotator};
use super::{Component, ComponentId, Scene, Transform};
use crate::error::SceneError;
use crate::interaction::{Clickable, HoverTooltip, Interaction, PauseFlag};
use crate::lighting::{
    FloatingLight, HoverLight, LightControl, OrbitLightRig, StaticLight,
};
use crate::motion::Orbit;
use crate::options::{InteractiveOptions, SceneOptions};

/// Ids of what [`compose`] mounted.
#[derive(Debug, Clone, Default)]
pub struct SceneHandles {
    /// Static platforms that loaded.
    pub platforms: Vec<ComponentId>,
    /// Drifting platforms that loaded.
    pub floating_platforms: Vec<ComponentId>,
    /// Fixed and floating lights.
    pub lights: Vec<ComponentId>,
    /// Parameter handles for `lights`, in the same order.
    pub light_controls: Vec<LightControl>,
    /// The interactive object, if enabled and its model loaded.
    pub interactive: Option<ComponentId>,
    /// Pause flag raised while the interactive object is hovered.
    pub interactive_pause: PauseFlag,
    /// The pointer-following circle, if enabled.
    pub mouse_circle: Option<ComponentId>,
    /// Asset paths that failed to load and were left out.
    pub skipped: Vec<String>,
}

/// Configure the engine and mount everything `options` describes.
///
/// Asset failures are logged and the affected piece left out; the rest of
/// the scene still mounts. Errors are only returned for failures that are
/// not tied to one asset.
pub fn compose<E: SceneEngine>(
    scene: &mut Scene<E>,
    options: &SceneOptions,
    interaction: &Interaction,
) -> Result<SceneHandles, SceneError> {
    let mut handles = SceneHandles::default();
    configure_engine(scene.engine_mut(), options);

    for platform in &options.platforms {
        let model = Box::new(Model::from_options(platform));
        if let Some(id) =
            mount_asset(scene, model, &platform.path, &mut handles.skipped)?
        {
            handles.platforms.push(id);
        }
    }

    let scale = options.lighting.intensity_scale;
    for fixed in &options.lighting.fixed {
        let mut fixed = *fixed;
        fixed.light.intensity *= scale;
        let light = StaticLight::new(fixed);
        handles.light_controls.push(light.control());
        handles.lights.push(scene.mount(Box::new(light))?);
    }
    for floating in &options.lighting.floating {
        let mut floating = *floating;
        floating.light.intensity *= scale;
        let light = FloatingLight::new(floating);
        handles.light_controls.push(light.control());
        handles.lights.push(scene.mount(Box::new(light))?);
    }

    for floating in &options.floating_platforms {
        let platform = Box::new(FloatingPlatform::new(
            Model::from_options(&floating.platform),
            floating.motion(),
        ));
        let path = &floating.platform.path;
        if let Some(id) =
            mount_asset(scene, platform, path, &mut handles.skipped)?
        {
            handles.floating_platforms.push(id);
        }
    }

    if options.interactive.enabled {
        let pause = handles.interactive_pause.clone();
        let object = interactive(&options.interactive, interaction, pause);
        handles.interactive = mount_asset(
            scene,
            object,
            &options.interactive.model,
            &mut handles.skipped,
        )?;
    }

    if options.mouse_circle.enabled {
        let circle = Box::new(MouseCircle::new(options.mouse_circle));
        handles.mouse_circle = Some(scene.mount(circle)?);
    }

    log::info!(
        "composed scene: {} platforms, {} lights, {} skipped",
        handles.platforms.len() + handles.floating_platforms.len(),
        handles.lights.len(),
        handles.skipped.len()
    );
    Ok(handles)
}

fn configure_engine(engine: &mut dyn SceneEngine, options: &SceneOptions) {
    engine.configure_camera(&options.camera);
    engine.configure_bloom(&options.bloom);

    let env = &options.environment;
    engine.set_ambient_light(env.ambient_color, env.ambient_intensity);
    engine.set_background(env.background);
    if env.hdri.is_empty() {
        return;
    }
    match engine.load_environment_map(&env.hdri) {
        Ok(texture) => {
            engine.set_environment(texture, env.intensity, env.as_background);
        }
        Err(e) => log::warn!("environment map unavailable: {e}"),
    }
}

/// Mount a tree whose only fallible step is loading `path`. Load failures
/// are logged and recorded in `skipped`; other errors propagate.
fn mount_asset<E: SceneEngine>(
    scene: &mut Scene<E>,
    component: Box<dyn Component>,
    path: &str,
    skipped: &mut Vec<String>,
) -> Result<Option<ComponentId>, SceneError> {
    match scene.mount(component) {
        Ok(id) => Ok(Some(id)),
        Err(e @ SceneError::AssetLoad { .. }) => {
            log::warn!("skipping {path}: {e}");
            skipped.push(path.to_owned());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Tooltip > clickable > orbiter > [orbit rig] > [hover light] >
/// rotators > model.
///
/// The hover lights sit inside the orbiter so their groups travel with
/// the rock; the clickable stays outside so its pause flag can freeze the
/// orbit.
fn interactive(
    options: &InteractiveOptions,
    interaction: &Interaction,
    pause: PauseFlag,
) -> Box<dyn Component> {
    let model = Model::new(
        options.model.clone(),
        Transform::new().with_scale(options.model_scale),
    );
    let mut inner: Box<dyn Component> = Box::new(model);
    for rotator in options.rotators.iter().rev() {
        inner = Box::new(Rotator::new(rotator.axis, rotator.speed, inner));
    }
    if options.hover_light.enabled {
        inner = Box::new(HoverLight::new(inner, &options.hover_light));
    }
    if options.orbit_lights.enabled {
        inner = Box::new(OrbitLightRig::new(inner, options.orbit_lights.clone()));
    }

    let orbit_options = options.orbit;
    let mut orbit = Orbit::new(
        Vec3::from(orbit_options.target),
        orbit_options.radius,
        orbit_options.speed,
    )
    .with_pause(pause.clone());
    if orbit_options.bob {
        orbit = orbit.with_bob(orbit_options.bob_amplitude);
    }
    inner = Box::new(Orbiter::new(orbit, inner));

    let outline = (options.outline_thickness > 0.0).then_some(Outline {
        color: options.outline_color,
        thickness: options.outline_thickness,
    });
    let mut clickable = Clickable::new(inner, interaction)
        .with_pause(pause)
        .with_outline(outline);
    if !options.link.is_empty() {
        clickable =
            clickable.with_link(options.link.clone(), options.link_target.clone());
    }
    inner = Box::new(clickable);

    if !options.tooltip.is_empty() {
        inner = Box::new(HoverTooltip::new(inner, options.tooltip.clone()));
    }
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::LightConfig;
    use crate::scene::{HeadlessEngine, NodeKind};
    use crate::util::Color;

    #[test]
    fn default_scene_mounts_everything() {
        let mut scene = Scene::new(HeadlessEngine::new());
        let handles =
            compose(&mut scene, &SceneOptions::default(), &Interaction::default())
                .unwrap();
        assert_eq!(handles.platforms.len(), 4);
        assert_eq!(handles.lights.len(), 2);
        assert!(handles.interactive.is_some());
        assert!(handles.mouse_circle.is_some());
        assert!(handles.skipped.is_empty());

        let engine = scene.engine();
        assert_eq!(engine.camera().unwrap().fov, 50.0);
        assert_eq!(engine.bloom().unwrap().intensity, 1.5);
        assert!(engine.environment().unwrap().background);
        assert_eq!(engine.ambient().unwrap().1, 0.3);
        // Five distinct models: four platforms and the rock.
        assert_eq!(engine.loaded_models(), 5);
        assert_eq!(engine.nodes_labelled("rotator").len(), 2);
    }

    #[test]
    fn missing_assets_are_skipped() {
        let root = std::env::temp_dir()
            .join(format!("starfolio-compose-{}", std::process::id()));
        std::fs::create_dir_all(root.join("models")).unwrap();
        std::fs::write(root.join("models/station.glb"), b"glTF").unwrap();

        let mut scene = Scene::new(HeadlessEngine::with_asset_root(&root));
        let handles =
            compose(&mut scene, &SceneOptions::default(), &Interaction::default())
                .unwrap();
        assert_eq!(handles.platforms.len(), 1);
        assert!(handles.interactive.is_none());
        assert_eq!(handles.skipped.len(), 4);
        assert!(scene.engine().environment().is_none());
        // Lights and the circle do not depend on assets.
        assert_eq!(handles.lights.len(), 2);
        assert!(handles.mouse_circle.is_some());
        // Nothing of the failed rock chain is left attached.
        assert!(scene.engine().nodes_labelled("orbiter").is_empty());

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn intensity_scale_applies_to_scene_lights() {
        let mut options = SceneOptions::default();
        options.lighting.intensity_scale = 0.5;
        options.lighting.fixed[0].helper = false;
        let mut scene = Scene::new(HeadlessEngine::new());
        let _ = compose(&mut scene, &options, &Interaction::default()).unwrap();

        let engine = scene.engine();
        let id = engine.nodes_labelled("static light")[0];
        let expected = LightConfig::directional(Color::WHITE, 0.75)
            .with_shadow(true);
        assert_eq!(engine.node(id).unwrap().kind, NodeKind::Light(expected));
    }

    #[test]
    fn optional_wrappers_follow_options() {
        let mut options = SceneOptions::default();
        options.interactive.tooltip.clear();
        options.interactive.hover_light.enabled = true;
        options.interactive.orbit_lights.enabled = true;
        options.mouse_circle.enabled = false;
        let mut scene = Scene::new(HeadlessEngine::new());
        let handles =
            compose(&mut scene, &options, &Interaction::default()).unwrap();
        let engine = scene.engine();
        assert!(engine.nodes_labelled("tooltip").is_empty());
        assert_eq!(engine.nodes_labelled("hover light").len(), 1);
        assert_eq!(engine.nodes_labelled("orbit light rig").len(), 1);
        assert!(handles.mouse_circle.is_none());

        // Hover lights ride inside the orbiter.
        let orbiter = engine.nodes_labelled("orbiter")[0];
        let rig = engine.nodes_labelled("orbit light rig")[0];
        let hover = engine.nodes_labelled("hover light")[0];
        assert_eq!(engine.node(rig).unwrap().parent, Some(orbiter));
        assert_eq!(engine.node(hover).unwrap().parent, Some(rig));
    }
}
