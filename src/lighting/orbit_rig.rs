//! Hover-activated rig of spot lights orbiting a subtree on random axes.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{attach_light, LightConfig};
use crate::error::SceneError;
use crate::input::PointerEvent;
use crate::interaction::{HoverState, HoverTransition, TooltipOverlay};
use crate::options::OrbitRigOptions;
use crate::scene::component::{Component, FrameContext, Group};
use crate::scene::engine::{publish, NodeId, SceneEngine};
use crate::scene::Transform;
use crate::util::frame_timing::FrameClock;
use crate::util::Color;

/// Per-light orbit parameters, fixed for the rig's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLightConfig {
    /// Unit rotation axis of the orbit plane.
    pub axis: Vec3,
    /// Starting angle in radians, `0..2π`.
    pub phase: f32,
    /// Light color drawn from the palette.
    pub color: Color,
    /// Multiplier on the rig speed, `0.3..1.5`.
    pub speed_factor: f32,
}

impl OrbitLightConfig {
    /// Draw `count` configs from a seeded generator. An empty palette
    /// falls back to white.
    #[must_use]
    pub fn generate(count: usize, palette: &[Color], seed: u64) -> Vec<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let axis = Vec3::new(
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                )
                .try_normalize()
                .unwrap_or(Vec3::Y);
                let phase = rng.random_range(0.0..TAU);
                let color = if palette.is_empty() {
                    Color::WHITE
                } else {
                    palette[rng.random_range(0..palette.len())]
                };
                let speed_factor = rng.random_range(0.3..1.5);
                Self {
                    axis,
                    phase,
                    color,
                    speed_factor,
                }
            })
            .collect()
    }

    /// Angle along the orbit at rig time `t` (elapsed × rig speed).
    #[must_use]
    pub fn angle(&self, t: f32) -> f32 {
        t * self.speed_factor + self.phase
    }

    /// World position at rig time `t` around `target`.
    #[must_use]
    pub fn position(&self, target: Vec3, radius: f32, t: f32) -> Vec3 {
        let offset = Quat::from_axis_angle(self.axis, self.angle(t))
            * Vec3::new(radius, 0.0, 0.0);
        target + offset
    }
}

#[derive(Debug, Clone, Copy)]
struct RigLight {
    node: NodeId,
    transform: Transform,
}

/// Wrapper that orbits a ring of spot lights around its subtree while it
/// is hovered.
///
/// Light nodes (and helpers) exist only while hovered; they are attached
/// at the scene root in world space and aimed at the wrapper's world
/// origin every tick. Mount the rig below whatever moves the subtree so
/// that origin travels with it.
pub struct OrbitLightRig {
    group: Group,
    child: Box<dyn Component>,
    hover: HoverState,
    options: OrbitRigOptions,
    configs: Vec<OrbitLightConfig>,
    lights: Vec<RigLight>,
    on_hover_change: Option<Box<dyn FnMut(bool)>>,
}

impl OrbitLightRig {
    /// Wrap `child`; light configs are generated once from
    /// `options.seed`.
    #[must_use]
    pub fn new(child: Box<dyn Component>, options: OrbitRigOptions) -> Self {
        let configs = OrbitLightConfig::generate(
            options.num_lights,
            &options.palette,
            options.seed,
        );
        Self {
            group: Group::new("orbit light rig", Transform::new()),
            child,
            hover: HoverState::new(),
            options,
            configs,
            lights: Vec::new(),
            on_hover_change: None,
        }
    }

    /// Observer told about every hover transition.
    #[must_use]
    pub fn on_hover_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_hover_change = Some(Box::new(f));
        self
    }

    /// Generated per-light configs.
    #[must_use]
    pub fn configs(&self) -> &[OrbitLightConfig] {
        &self.configs
    }

    /// Transforms of the currently active lights, in config order.
    pub fn light_transforms(&self) -> impl Iterator<Item = &Transform> {
        self.lights.iter().map(|light| &light.transform)
    }

    fn light_config(&self, config: &OrbitLightConfig) -> LightConfig {
        LightConfig::spot(
            config.color,
            self.options.intensity,
            self.options.angle,
            self.options.penumbra,
        )
        .with_falloff(self.options.radius * 3.0, 2.0)
        .with_shadow(true)
    }

    fn sync_lights(&mut self, engine: &mut dyn SceneEngine) {
        let wanted = self.hover.is_hovered() && self.group.node().is_some();
        if wanted && self.lights.is_empty() {
            let lights: Vec<RigLight> = self
                .configs
                .iter()
                .map(|config| {
                    let (node, _) = attach_light(
                        engine,
                        "orbit rig light",
                        None,
                        self.light_config(config),
                        Transform::new(),
                        self.options.show_helpers,
                    );
                    RigLight {
                        node,
                        transform: Transform::new(),
                    }
                })
                .collect();
            log::debug!("orbit rig: {} lights on", lights.len());
            self.lights = lights;
        } else if !wanted && !self.lights.is_empty() {
            for light in self.lights.drain(..) {
                engine.detach(light.node);
            }
            log::debug!("orbit rig: lights off");
        }
    }

    fn notify(&mut self, hovered: bool) {
        if let Some(observer) = &mut self.on_hover_change {
            observer(hovered);
        }
    }
}

impl Component for OrbitLightRig {
    fn name(&self) -> &'static str {
        "orbit light rig"
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
        self.sync_lights(ctx.engine);
        if !self.lights.is_empty() {
            let target = ctx.world_position(self.group.transform.position);
            let t = clock.elapsed * self.options.speed;
            for (light, config) in self.lights.iter_mut().zip(&self.configs) {
                light.transform.position =
                    config.position(target, self.options.radius, t);
                let _ = light.transform.look_at(target);
                publish(ctx.engine, Some(light.node), &light.transform);
            }
        }
        let child = &mut self.child;
        ctx.nested(self.group.transform.matrix(), |ctx| child.tick(clock, ctx));
    }

    fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter => {
                if self.hover.enter() == HoverTransition::Entered {
                    self.notify(true);
                }
            }
            PointerEvent::Leave => {
                if self.hover.leave() == HoverTransition::Left {
                    self.notify(false);
                }
            }
            PointerEvent::Move { .. } | PointerEvent::Click => {}
        }
        self.child.pointer(event);
    }

    fn overlays(&self, out: &mut Vec<TooltipOverlay>) {
        self.child.overlays(out);
    }

    fn unmount(&mut self, engine: &mut dyn SceneEngine) {
        self.child.unmount(engine);
        for light in self.lights.drain(..) {
            engine.detach(light.node);
        }
        let _ = self.hover.leave();
        self.group.unmount(engine);
    }
}
