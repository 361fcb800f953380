//! Motion wrappers and leaf components: orbiters, rotators, models,
//! floating platforms and the pointer-following circle.

use glam::Vec3;

use super::component::{Component, FrameContext, Group};
use super::engine::{publish, NodeDesc, NodeId, NodeKind, SceneEngine};
use super::Transform;
use crate::error::SceneError;
use crate::input::PointerEvent;
use crate::interaction::{PauseFlag, TooltipOverlay};
use crate::motion::{Axis, FloatMotion, Motion, MouseFollow, Orbit, Spin};
use crate::options::{MouseCircleOptions, PlatformOptions};
use crate::util::frame_timing::FrameClock;

// ── Motion wrappers ──────────────────────────────────────────────────────

/// Group that orbits a target and faces it, carrying a child subtree.
pub struct Orbiter {
    group: Group,
    orbit: Orbit,
    child: Box<dyn Component>,
}

impl Orbiter {
    /// Orbit `child` using `orbit`. The group starts on the circle facing
    /// the target, so a pause before the first tick leaves it there.
    #[must_use]
    pub fn new(orbit: Orbit, child: Box<dyn Component>) -> Self {
        let mut transform = Transform::new().with_position(orbit.position(0.0));
        let _ = transform.look_at(orbit.state().target);
        Self {
            group: Group::new("orbiter", transform),
            orbit,
            child,
        }
    }

    /// Current local transform of the orbiting group.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.group.transform
    }

    /// The orbit driving this group.
    #[must_use]
    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }
}

impl Component for Orbiter {
    fn name(&self) -> &'static str {
        "orbiter"
    }

    fn mount(
        &mut self,
        engine: &mut dyn SceneEngine,
        parent: Option<NodeId>,
    ) -> Result<(), SceneError> {
        let node = self.group.mount(engine, parent);
        self.child.mount(engine, Some(node))
    }

    fn tick(&mut self, clock: FrameClock, ctx: &mut FrameContext<'_>) {
        if self.group.node().is_some() {
            self.orbit.apply(clock, &mut self.group.transform);
            self.group.sync(ctx.engine);
        }
        let child = &mut self.child;
        ctx.nested(self.group.transform.matrix(), |ctx| child.tick(clock, ctx));
    }

    fn pointer(&mut self, event: PointerEvent) {
        self.child.pointer(event);
    }

    fn overlays(&self, out: &mut Vec<TooltipOverlay>) {
        self.child.overlays(out);
    }

    fn unmount(&mut self, engine: &mut dyn SceneEngine) {
        self.child.unmount(engine);
        self.group.unmount(engine);
    }
}

/// Group spinning about one local axis, carrying a child subtree.
pub struct Rotator {
    group: Group,
    spin: Spin,
    child: Box<dyn Component>,
}

impl Rotator {
    /// Spin `child` about `axis` at `speed` radians per second.
    #[must_use]
    pub fn new(axis: Axis, speed: f32, child: Box<dyn Component>) -> Self {
        Self {
            group: Group::new("rotator", Transform::new()),
            spin: Spin::new(axis, speed),
            child,
        }
    }

    /// Pause while `pause` is raised.
    #[must_use]
    pub fn with_pause(mut self, pause: PauseFlag) -> Self {
        self.spin = self.spin.with_pause(pause);
        self
    }

    /// The spin driving this group.
    #[must_use]
    pub fn spin(&self) -> &Spin {
        &self.spin
    }
}

impl Component for Rotator {
    fn name(&self) -> &'static str {
        "rotator"
    }

    fn mount(
        &mut self,
        engine: &mut dyn SceneEngine,
        parent: Option<NodeId>,
    ) -> Result<(), SceneError> {
        let node = self.group.mount(engine, parent);
        self.child.mount(engine, Some(node))
    }

    fn tick(&mut self, clock: FrameClock, ctx: &mut FrameContext<'_>) {
        if self.group.node().is_some() {
            self.spin.apply(clock, &mut self.group.transform);
            self.group.sync(ctx.engine);
        }
        let child = &mut self.child;
        ctx.nested(self.group.transform.matrix(), |ctx| child.tick(clock, ctx));
    }

    fn pointer(&mut self, event: PointerEvent) {
        self.child.pointer(event);
    }

    fn overlays(&self, out: &mut Vec<TooltipOverlay>) {
        self.child.overlays(out);
    }

    fn unmount(&mut self, engine: &mut dyn SceneEngine) {
        self.child.unmount(engine);
        self.group.unmount(engine);
    }
}

// ── Leaves ───────────────────────────────────────────────────────────────

/// A static model loaded by path.
#[derive(Debug, Clone)]
pub struct Model {
    path: String,
    transform: Transform,
    cast_shadow: bool,
    receive_shadow: bool,
    node: Option<NodeId>,
}

impl Model {
    /// Model at `path` with shadows on.
    pub fn new(path: impl Into<String>, transform: Transform) -> Self {
        Self {
            path: path.into(),
            transform,
            cast_shadow: true,
            receive_shadow: true,
            node: None,
        }
    }

    /// Model described by platform options.
    #[must_use]
    pub fn from_options(options: &PlatformOptions) -> Self {
        Self::new(options.path.clone(), options.transform())
            .with_shadows(options.cast_shadow, options.receive_shadow)
    }

    /// Same model with shadow flags.
    #[must_use]
    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    /// Asset path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Engine node, once mounted.
    #[must_use]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }
}

impl Component for Model {
    fn name(&self) -> &'static str {
        "model"
    }

    fn mount(
        &mut self,
        engine: &mut dyn SceneEngine,
        parent: Option<NodeId>,
    ) -> Result<(), SceneError> {
        let handle = engine.load_model(&self.path)?;
        let desc = NodeDesc::new(self.path.clone(), NodeKind::Model(handle))
            .with_parent(parent)
            .with_transform(self.transform)
            .with_shadows(self.cast_shadow, self.receive_shadow);
        self.node = Some(engine.attach(desc));
        Ok(())
    }

    fn tick(&mut self, _clock: FrameClock, _ctx: &mut FrameContext<'_>) {}

    fn unmount(&mut self, engine: &mut dyn SceneEngine) {
        if let Some(id) = self.node.take() {
            engine.detach(id);
        }
    }
}

/// A model drifting with [`FloatMotion`].
pub struct FloatingPlatform {
    model: Model,
    motion: FloatMotion,
    transform: Transform,
}

impl FloatingPlatform {
    /// Float `model` with `motion`.
    #[must_use]
    pub fn new(model: Model, motion: FloatMotion) -> Self {
        let transform = model.transform;
        Self {
            model,
            motion,
            transform,
        }
    }

    /// Current transform of the model.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}

impl Component for FloatingPlatform {
    fn name(&self) -> &'static str {
        "floating platform"
    }

    fn mount(
        &mut self,
        engine: &mut dyn SceneEngine,
        parent: Option<NodeId>,
    ) -> Result<(), SceneError> {
        self.model.mount(engine, parent)
    }

    fn tick(&mut self, clock: FrameClock, ctx: &mut FrameContext<'_>) {
        if self.model.node.is_none() {
            return;
        }
        self.motion.apply(clock, &mut self.transform);
        publish(ctx.engine, self.model.node, &self.transform);
    }

    fn unmount(&mut self, engine: &mut dyn SceneEngine) {
        self.model.unmount(engine);
    }
}

/// Unlit disc that eases toward the pointer; bright enough to bloom.
pub struct MouseCircle {
    options: MouseCircleOptions,
    follow: MouseFollow,
    transform: Transform,
    node: Option<NodeId>,
}

impl MouseCircle {
    /// Circle configured by `options`, starting at `options.position`.
    #[must_use]
    pub fn new(options: MouseCircleOptions) -> Self {
        let follow = MouseFollow::new(options.bounds.into(), options.smoothing);
        let transform =
            Transform::new().with_position(Vec3::from(options.position));
        Self {
            options,
            follow,
            transform,
            node: None,
        }
    }

    /// Current transform of the circle.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}

impl Component for MouseCircle {
    fn name(&self) -> &'static str {
        "mouse circle"
    }

    fn mount(
        &mut self,
        engine: &mut dyn SceneEngine,
        parent: Option<NodeId>,
    ) -> Result<(), SceneError> {
        let kind = NodeKind::Circle {
            radius: self.options.radius,
            segments: self.options.segments,
            color: self.options.color,
            tone_mapped: false,
        };
        let desc = NodeDesc::new("mouse circle", kind)
            .with_parent(parent)
            .with_transform(self.transform);
        self.node = Some(engine.attach(desc));
        Ok(())
    }

    fn tick(&mut self, _clock: FrameClock, ctx: &mut FrameContext<'_>) {
        if self.node.is_none() {
            return;
        }
        self.follow.apply(ctx.pointer.ndc(), &mut self.transform);
        publish(ctx.engine, self.node, &self.transform);
    }

    fn unmount(&mut self, engine: &mut dyn SceneEngine) {
        if let Some(id) = self.node.take() {
            engine.detach(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{EulerRot, Quat};

    use super::*;
    use crate::options::FloatingPlatformOptions;
    use crate::scene::{HeadlessEngine, Scene};

    #[test]
    fn orbiter_paused_before_first_tick_stays_on_circle() {
        let pause = PauseFlag::new();
        pause.set(true);
        let orbit = Orbit::new(Vec3::ZERO, 3.0, 0.3).with_pause(pause);
        let model = Box::new(Model::new("/models/rock.glb", Transform::new()));
        let mut scene = Scene::new(HeadlessEngine::new());
        let _ = scene.mount(Box::new(Orbiter::new(orbit, model))).unwrap();

        scene.frame(FrameClock::new(0.1, 0.1));
        let engine = scene.engine();
        let node = engine.nodes_labelled("orbiter")[0];
        let t = engine.node(node).unwrap().transform;
        assert!(t.position.abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-6));
        assert!(t.forward().abs_diff_eq(Vec3::NEG_X, 1e-5));
    }

    #[test]
    fn floating_platform_publishes_motion_with_rest_tilt() {
        let mut options = FloatingPlatformOptions {
            orbit: false,
            rotate_speed: 1.0,
            ..FloatingPlatformOptions::default()
        };
        options.platform.path = "/models/drift.glb".to_owned();
        options.platform.position = [0.0, 1.0, 0.0];
        options.platform.rotation = [0.3, 0.0, 0.2];
        let platform = FloatingPlatform::new(
            Model::from_options(&options.platform),
            options.motion(),
        );
        let mut scene = Scene::new(HeadlessEngine::new());
        let _ = scene.mount(Box::new(platform)).unwrap();

        for step in 1..=10 {
            scene.frame(FrameClock::new(step as f32 * 0.1, 0.1));
        }
        let engine = scene.engine();
        let node = engine.nodes_labelled("/models/drift.glb")[0];
        let t = engine.node(node).unwrap().transform;
        assert!((t.position.y - 1.0).abs() <= 0.1 + 1e-6);
        assert_eq!((t.position.x, t.position.z), (0.0, 0.0));
        let expected = Quat::from_euler(EulerRot::XYZ, 0.3, 1.0, 0.2);
        assert!(t.rotation.abs_diff_eq(expected, 1e-5));
    }
}
