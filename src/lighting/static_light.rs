use glam::Vec3;

use super::{attach_light, LightConfig, LightControl};
use crate::error::SceneError;
use crate::options::StaticLightOptions;
use crate::scene::component::{Component, FrameContext};
use crate::scene::engine::{NodeId, SceneEngine};
use crate::scene::Transform;
use crate::util::frame_timing::FrameClock;

/// A light at a fixed position. Aimed kinds point at the origin.
#[derive(Debug, Clone)]
pub struct StaticLight {
    options: StaticLightOptions,
    control: LightControl,
    applied: LightConfig,
    node: Option<NodeId>,
}

impl StaticLight {
    /// Light configured by `options`.
    #[must_use]
    pub fn new(options: StaticLightOptions) -> Self {
        Self {
            options,
            control: LightControl::new(options.light),
            applied: options.light,
            node: None,
        }
    }

    /// Handle for changing the light's parameters after mounting.
    #[must_use]
    pub fn control(&self) -> LightControl {
        self.control.clone()
    }

    /// Transform the light is mounted with.
    #[must_use]
    pub fn transform(&self) -> Transform {
        let mut transform =
            Transform::new().with_position(Vec3::from(self.options.position));
        if self.control.get().kind.is_aimed() {
            let _ = transform.look_at(Vec3::ZERO);
        }
        transform
    }
}

impl Component for StaticLight {
    fn name(&self) -> &'static str {
        "static light"
    }

    fn mount(
        &mut self,
        engine: &mut dyn SceneEngine,
        parent: Option<NodeId>,
    ) -> Result<(), SceneError> {
        self.applied = self.control.get();
        let (light, _) = attach_light(
            engine,
            "static light",
            parent,
            self.applied,
            self.transform(),
            self.options.helper,
        );
        self.node = Some(light);
        Ok(())
    }

    fn tick(&mut self, _clock: FrameClock, ctx: &mut FrameContext<'_>) {
        if let Some(node) = self.node {
            self.control.sync(ctx.engine, node, &mut self.applied);
        }
    }

    fn unmount(&mut self, engine: &mut dyn SceneEngine) {
        if let Some(id) = self.node.take() {
            engine.detach(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{HeadlessEngine, NodeKind, Scene};
    use crate::util::Color;

    #[test]
    fn aimed_kinds_face_the_origin() {
        let light = StaticLight::new(StaticLightOptions {
            position: [-3.0, -1.0, 1.0],
            ..StaticLightOptions::default()
        });
        let t = light.transform();
        let expected = (-t.position).normalize();
        assert!(t.forward().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn unmount_removes_light_and_helper() {
        let mut scene = Scene::new(HeadlessEngine::new());
        let id = scene
            .mount(Box::new(StaticLight::new(StaticLightOptions::default())))
            .unwrap();
        assert_eq!(scene.engine().light_count(), 1);
        assert_eq!(scene.engine().nodes_labelled("static light helper").len(), 1);

        assert!(scene.unmount(id));
        assert_eq!(scene.engine().node_count(), 0);
    }

    #[test]
    fn control_changes_reach_the_engine_on_the_next_tick() {
        let light = StaticLight::new(StaticLightOptions {
            helper: false,
            ..StaticLightOptions::default()
        });
        let control = light.control();
        let mut scene = Scene::new(HeadlessEngine::new());
        let _ = scene.mount(Box::new(light)).unwrap();
        let node = scene.engine().nodes_labelled("static light")[0];
        let kind = |scene: &Scene<HeadlessEngine>| {
            scene.engine().node(node).unwrap().kind.clone()
        };

        control.set_intensity(0.25);
        control.set_color(Color::CYAN);
        let expected = LightConfig {
            intensity: 0.25,
            color: Color::CYAN,
            ..StaticLightOptions::default().light
        };
        assert_ne!(kind(&scene), NodeKind::Light(expected));

        scene.frame(FrameClock::new(0.1, 0.1));
        assert_eq!(kind(&scene), NodeKind::Light(expected));
    }
}
