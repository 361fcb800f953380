//! The mounted scene: components, the frame loop and pointer routing.
//!
//! A [`Scene`] owns a [`SceneEngine`] and a flat list of mounted
//! [`Component`] trees. [`Scene::frame`] ticks them in mount order;
//! [`Scene::dispatch`] routes a pointer event to one tree. Events only
//! record state, so nothing an event does is visible to the engine until
//! the next frame.

pub mod component;
mod composition;
pub mod engine;
mod headless;
pub mod nodes;
mod transform;

pub use component::{Component, FrameContext, Group};
pub use composition::{compose, SceneHandles};
pub use engine::{
    ModelHandle, NodeDesc, NodeId, NodeKind, Outline, SceneEngine,
    TextureHandle,
};
pub use headless::{EngineNode, EnvironmentBinding, HeadlessEngine};
pub use nodes::{FloatingPlatform, Model, MouseCircle, Orbiter, Rotator};
pub use transform::Transform;

use crate::error::SceneError;
use crate::input::{PointerEvent, PointerState};
use crate::interaction::TooltipOverlay;
use crate::util::frame_timing::FrameClock;

/// Default viewport size until the host reports one.
const DEFAULT_VIEWPORT: (f32, f32) = (1280.0, 720.0);

/// Identifies a component tree mounted in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u32);

struct Mounted {
    id: ComponentId,
    component: Box<dyn Component>,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Mounted component trees plus the engine they draw into.
pub struct Scene<E: SceneEngine> {
    engine: E,
    /// Component trees in mount order.
    mounted: Vec<Mounted>,
    pointer: PointerState,
    next_id: u32,
    frames: u64,
}

impl<E: SceneEngine> Scene<E> {
    /// Empty scene drawing into `engine`.
    pub fn new(engine: E) -> Self {
        let (width, height) = DEFAULT_VIEWPORT;
        Self {
            engine,
            mounted: Vec::new(),
            pointer: PointerState::new(width, height),
            next_id: 0,
            frames: 0,
        }
    }

    /// Mount a component tree at the scene root.
    ///
    /// On failure the partially attached tree is unmounted again and the
    /// error returned.
    pub fn mount(
        &mut self,
        mut component: Box<dyn Component>,
    ) -> Result<ComponentId, SceneError> {
        if let Err(e) = component.mount(&mut self.engine, None) {
            component.unmount(&mut self.engine);
            return Err(e);
        }
        let id = ComponentId(self.next_id);
        self.next_id += 1;
        log::info!("mounted {} as {id:?}", component.name());
        self.mounted.push(Mounted { id, component });
        Ok(id)
    }

    /// Unmount a tree, detaching its nodes and releasing cursor requests.
    /// Returns `false` for unknown ids.
    pub fn unmount(&mut self, id: ComponentId) -> bool {
        let Some(index) = self.mounted.iter().position(|m| m.id == id) else {
            return false;
        };
        let mut mounted = self.mounted.remove(index);
        mounted.component.unmount(&mut self.engine);
        log::info!("unmounted {} ({id:?})", mounted.component.name());
        true
    }

    /// Unmount every tree, last mounted first.
    pub fn clear(&mut self) {
        while let Some(mut mounted) = self.mounted.pop() {
            mounted.component.unmount(&mut self.engine);
        }
    }

    /// Route a pointer event to one tree. `Move` also updates the
    /// canvas-wide pointer. Returns `false` for unknown ids.
    pub fn dispatch(&mut self, id: ComponentId, event: PointerEvent) -> bool {
        if let PointerEvent::Move { x, y } = event {
            self.pointer.move_to(x, y);
        }
        let Some(mounted) = self.mounted.iter_mut().find(|m| m.id == id)
        else {
            return false;
        };
        log::debug!("{} <- {}", mounted.component.name(), event.name());
        mounted.component.pointer(event);
        true
    }

    /// Canvas-wide pointer move not aimed at any tree.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.move_to(x, y);
    }

    /// Viewport resized.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.pointer.resize(width, height);
    }

    /// Tick every mounted tree once, in mount order.
    pub fn frame(&mut self, clock: FrameClock) {
        let mut ctx = FrameContext::new(&mut self.engine, self.pointer);
        for mounted in &mut self.mounted {
            mounted.component.tick(clock, &mut ctx);
        }
        self.frames += 1;
    }

    /// Tooltips to draw over the canvas this frame.
    #[must_use]
    pub fn overlays(&self) -> Vec<TooltipOverlay> {
        let mut out = Vec::new();
        for mounted in &self.mounted {
            mounted.component.overlays(&mut out);
        }
        out
    }

    /// Number of mounted trees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    /// Whether nothing is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }

    /// Frames ticked so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Canvas-wide pointer.
    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// The engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The engine, mutably.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
