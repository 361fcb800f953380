//! Mountable scene components and the per-frame context they tick with.

use glam::{Mat4, Vec3};

use super::engine::{publish, NodeDesc, NodeId, SceneEngine};
use super::Transform;
use crate::error::SceneError;
use crate::input::{PointerEvent, PointerState};
use crate::interaction::TooltipOverlay;
use crate::util::frame_timing::FrameClock;

/// State handed to components on every tick.
pub struct FrameContext<'a> {
    /// Engine to publish transforms and node changes to.
    pub engine: &'a mut dyn SceneEngine,
    /// Canvas-wide pointer as of this frame.
    pub pointer: PointerState,
    parent_world: Mat4,
}

impl<'a> FrameContext<'a> {
    /// Context for a root-level tick.
    pub fn new(engine: &'a mut dyn SceneEngine, pointer: PointerState) -> Self {
        Self {
            engine,
            pointer,
            parent_world: Mat4::IDENTITY,
        }
    }

    /// World matrix of the node currently being ticked's parent.
    #[must_use]
    pub fn parent_world(&self) -> Mat4 {
        self.parent_world
    }

    /// World position of a point given in the current parent's space.
    #[must_use]
    pub fn world_position(&self, local: Vec3) -> Vec3 {
        self.parent_world.transform_point3(local)
    }

    /// Run `f` with `local` pushed onto the parent chain.
    pub fn nested<R>(
        &mut self,
        local: Mat4,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let saved = self.parent_world;
        self.parent_world = saved * local;
        let out = f(self);
        self.parent_world = saved;
        out
    }
}

/// A piece of the scene with its own nodes and per-frame behaviour.
///
/// Mounting attaches nodes, ticking updates them, unmounting detaches
/// them and releases any shared state (cursor requests) the component
/// holds. Pointer events only record state; engine-visible reactions
/// happen on the next tick.
pub trait Component {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Attach nodes under `parent`.
    fn mount(
        &mut self,
        engine: &mut dyn SceneEngine,
        parent: Option<NodeId>,
    ) -> Result<(), SceneError>;

    /// Advance one frame. Must not block.
    fn tick(&mut self, clock: FrameClock, ctx: &mut FrameContext<'_>);

    /// React to a pointer event routed to this subtree.
    fn pointer(&mut self, _event: PointerEvent) {}

    /// Append screen-space overlays to draw this frame.
    fn overlays(&self, _out: &mut Vec<TooltipOverlay>) {}

    /// Detach nodes and release held resources.
    fn unmount(&mut self, engine: &mut dyn SceneEngine);
}

/// Transform group node owned by a wrapper component.
///
/// Until mounted, every engine call is a no-op so ticks before the node
/// exists are harmless.
#[derive(Debug, Clone)]
pub struct Group {
    label: &'static str,
    node: Option<NodeId>,
    /// Local transform published on [`sync`](Self::sync).
    pub transform: Transform,
}

impl Group {
    /// Unmounted group with an initial transform.
    #[must_use]
    pub fn new(label: &'static str, transform: Transform) -> Self {
        Self {
            label,
            node: None,
            transform,
        }
    }

    /// Engine node, once mounted.
    #[must_use]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Attach the group node under `parent`.
    pub fn mount(
        &mut self,
        engine: &mut dyn SceneEngine,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = engine.attach(
            NodeDesc::group(self.label)
                .with_parent(parent)
                .with_transform(self.transform),
        );
        self.node = Some(id);
        id
    }

    /// Publish the current transform.
    pub fn sync(&self, engine: &mut dyn SceneEngine) {
        publish(engine, self.node, &self.transform);
    }

    /// Detach the group node.
    pub fn unmount(&mut self, engine: &mut dyn SceneEngine) {
        if let Some(id) = self.node.take() {
            engine.detach(id);
        }
    }
}
