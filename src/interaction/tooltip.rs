use glam::Vec2;

use super::hover::{HoverState, HoverTransition};
use crate::error::SceneError;
use crate::input::PointerEvent;
use crate::scene::component::{Component, FrameContext, Group};
use crate::scene::engine::{NodeId, SceneEngine};
use crate::scene::Transform;
use crate::util::frame_timing::FrameClock;
use crate::util::Color;

/// Screen-space offset keeping the tooltip clear of the cursor.
pub const DEFAULT_TOOLTIP_OFFSET: Vec2 = Vec2::new(16.0, 16.0);

/// A tooltip to draw this frame, in viewport pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOverlay {
    /// Text content.
    pub text: String,
    /// Left edge in pixels from the viewport's left.
    pub left: f32,
    /// Top edge in pixels from the viewport's top.
    pub top: f32,
    /// Text and border color.
    pub color: Color,
}

/// Shows a tooltip next to the pointer while its subtree is hovered.
pub struct HoverTooltip {
    group: Group,
    child: Box<dyn Component>,
    hover: HoverState,
    content: String,
    offset: Vec2,
    color: Color,
    pointer: Vec2,
}

impl HoverTooltip {
    /// Tooltip reading `content` around `child`.
    #[must_use]
    pub fn new(child: Box<dyn Component>, content: impl Into<String>) -> Self {
        Self {
            group: Group::new("tooltip", Transform::new()),
            child,
            hover: HoverState::new(),
            content: content.into(),
            offset: DEFAULT_TOOLTIP_OFFSET,
            color: Color::CYAN,
            pointer: Vec2::ZERO,
        }
    }

    /// Pixel offset from the pointer.
    #[must_use]
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Text and border color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The overlay to draw now, if hovered.
    #[must_use]
    pub fn overlay(&self) -> Option<TooltipOverlay> {
        self.hover.is_hovered().then(|| {
            let at = self.pointer + self.offset;
            TooltipOverlay {
                text: self.content.clone(),
                left: at.x,
                top: at.y,
                color: self.color,
            }
        })
    }
}

impl Component for HoverTooltip {
    fn name(&self) -> &'static str {
        "tooltip"
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
        let child = &mut self.child;
        ctx.nested(self.group.transform.matrix(), |ctx| child.tick(clock, ctx));
    }

    fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter => {
                if self.hover.enter() == HoverTransition::Entered {
                    log::debug!("tooltip {:?} shown", self.content);
                }
            }
            PointerEvent::Leave => {
                let _ = self.hover.leave();
            }
            PointerEvent::Move { x, y } => self.pointer = Vec2::new(x, y),
            PointerEvent::Click => {}
        }
        self.child.pointer(event);
    }

    fn overlays(&self, out: &mut Vec<TooltipOverlay>) {
        out.extend(self.overlay());
        self.child.overlays(out);
    }

    fn unmount(&mut self, engine: &mut dyn SceneEngine) {
        self.child.unmount(engine);
        let _ = self.hover.leave();
        self.group.unmount(engine);
    }
}
