use glam::Vec3;

use super::{attach_light, LightConfig, LightControl};
use crate::error::SceneError;
use crate::motion::{Bob, OrbitState};
use crate::options::FloatingLightOptions;
use crate::scene::component::{Component, FrameContext};
use crate::scene::engine::{publish, NodeId, SceneEngine};
use crate::scene::Transform;
use crate::util::frame_timing::FrameClock;

/// Light circling a target while bobbing vertically.
///
/// The orbit angle is `elapsed * orbit_speed`; the height is
/// `target.y + height + sin(2t) * vertical_amp`. Spot and directional
/// variants stay aimed at the target.
#[derive(Debug, Clone)]
pub struct FloatingLight {
    options: FloatingLightOptions,
    orbit: OrbitState,
    bob: Bob,
    control: LightControl,
    applied: LightConfig,
    transform: Transform,
    node: Option<NodeId>,
}

impl FloatingLight {
    /// Floating light configured by `options`.
    #[must_use]
    pub fn new(options: FloatingLightOptions) -> Self {
        let target = Vec3::from(options.target);
        let orbit =
            OrbitState::new(target, options.orbit_radius, options.orbit_speed);
        let bob = Bob::vertical(options.vertical_amp, 2.0);
        let mut light = Self {
            options,
            orbit,
            bob,
            control: LightControl::new(options.light),
            applied: options.light,
            transform: Transform::new(),
            node: None,
        };
        light.place(0.0);
        light
    }

    /// Light position at elapsed time `elapsed`.
    #[must_use]
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        let mut p = self.orbit.point_at(elapsed * self.orbit.speed);
        p.y += self.options.height;
        p + self.bob.displacement(elapsed)
    }

    /// Handle for changing the light's parameters after mounting.
    #[must_use]
    pub fn control(&self) -> LightControl {
        self.control.clone()
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    fn place(&mut self, elapsed: f32) {
        self.transform.position = self.position_at(elapsed);
        if self.control.get().kind.is_aimed() {
            let _ = self.transform.look_at(self.orbit.target);
        }
    }
}

impl Component for FloatingLight {
    fn name(&self) -> &'static str {
        "floating light"
    }

    fn mount(
        &mut self,
        engine: &mut dyn SceneEngine,
        parent: Option<NodeId>,
    ) -> Result<(), SceneError> {
        self.applied = self.control.get();
        let (light, _) = attach_light(
            engine,
            "floating light",
            parent,
            self.applied,
            self.transform,
            self.options.helper,
        );
        self.node = Some(light);
        Ok(())
    }

    fn tick(&mut self, clock: FrameClock, ctx: &mut FrameContext<'_>) {
        let Some(node) = self.node else {
            return;
        };
        self.control.sync(ctx.engine, node, &mut self.applied);
        self.place(clock.elapsed);
        publish(ctx.engine, self.node, &self.transform);
    }

    fn unmount(&mut self, engine: &mut dyn SceneEngine) {
        if let Some(id) = self.node.take() {
            engine.detach(id);
        }
    }
}
