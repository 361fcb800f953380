use glam::Vec3;

use super::{attach_light, LightConfig};
use crate::error::SceneError;
use crate::input::PointerEvent;
use crate::interaction::{HoverState, HoverTransition, TooltipOverlay};
use crate::options::HoverLightOptions;
use crate::scene::component::{Component, FrameContext, Group};
use crate::scene::engine::{NodeId, SceneEngine};
use crate::scene::Transform;
use crate::util::frame_timing::FrameClock;

/// Wrapper that switches on a point light above its subtree while hovered.
pub struct HoverLight {
    group: Group,
    child: Box<dyn Component>,
    hover: HoverState,
    light: LightConfig,
    offset: Vec3,
    light_node: Option<NodeId>,
    on_hover_change: Option<Box<dyn FnMut(bool)>>,
}

impl HoverLight {
    /// Wrap `child` with a hover light configured by `options`.
    #[must_use]
    pub fn new(child: Box<dyn Component>, options: &HoverLightOptions) -> Self {
        Self {
            group: Group::new("hover light", Transform::new()),
            child,
            hover: HoverState::new(),
            light: LightConfig::point(options.color, options.intensity)
                .with_falloff(options.distance, 2.0),
            offset: Vec3::from(options.offset),
            light_node: None,
            on_hover_change: None,
        }
    }

    /// Observer told about every hover transition.
    #[must_use]
    pub fn on_hover_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_hover_change = Some(Box::new(f));
        self
    }

    /// Whether the light node currently exists.
    #[must_use]
    pub fn is_lit(&self) -> bool {
        self.light_node.is_some()
    }

    fn sync_light(&mut self, engine: &mut dyn SceneEngine) {
        let Some(group) = self.group.node() else {
            return;
        };
        match (self.hover.is_hovered(), self.light_node) {
            (true, None) => {
                let (node, _) = attach_light(
                    engine,
                    "hover light",
                    Some(group),
                    self.light,
                    Transform::new().with_position(self.offset),
                    false,
                );
                self.light_node = Some(node);
            }
            (false, Some(node)) => {
                engine.detach(node);
                self.light_node = None;
            }
            _ => {}
        }
    }

    fn notify(&mut self, hovered: bool) {
        if let Some(observer) = &mut self.on_hover_change {
            observer(hovered);
        }
    }
}

impl Component for HoverLight {
    fn name(&self) -> &'static str {
        "hover light"
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
        self.sync_light(ctx.engine);
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
        if let Some(node) = self.light_node.take() {
            engine.detach(node);
        }
        let _ = self.hover.leave();
        self.group.unmount(engine);
    }
}
