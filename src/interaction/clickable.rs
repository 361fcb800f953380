use std::{fmt, rc::Rc};

use super::cursor::{CursorContext, CursorRequest};
use super::hover::{HoverState, HoverTransition, PauseFlag};
use super::{Interaction, TooltipOverlay};
use crate::error::SceneError;
use crate::input::{CursorStyle, PointerEvent};
use crate::scene::component::{Component, FrameContext, Group};
use crate::scene::engine::{NodeId, Outline, SceneEngine};
use crate::scene::Transform;
use crate::util::frame_timing::FrameClock;
use crate::util::Color;

/// Outline thickness used when none is configured.
pub const DEFAULT_OUTLINE_THICKNESS: f32 = 0.02;

/// Opens URLs on click (a browser window, a log line, a test recorder).
pub trait LinkOpener {
    /// Open `url` in the browsing context named `target`.
    fn open(&self, url: &str, target: &str) -> Result<(), SceneError>;
}

/// Opener that only logs, for headless runs.
#[derive(Debug, Default)]
pub struct LogLinkOpener;

impl LinkOpener for LogLinkOpener {
    fn open(&self, url: &str, target: &str) -> Result<(), SceneError> {
        log::info!("open {url} (target {target})");
        Ok(())
    }
}

/// URL opened when a [`Clickable`] is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Destination URL.
    pub url: String,
    /// Browsing context name, `_blank` for a new tab.
    pub target: String,
}

/// Hover/click wrapper.
///
/// While hovered it raises its [`PauseFlag`], outlines its subtree and
/// holds a pointer-cursor request. A click opens the configured link, or
/// runs the click callback when there is no link.
pub struct Clickable {
    group: Group,
    child: Box<dyn Component>,
    hover: HoverState,
    outline: Option<Outline>,
    outline_shown: bool,
    link: Option<Link>,
    on_click: Option<Box<dyn FnMut()>>,
    on_hover_change: Option<Box<dyn FnMut(bool)>>,
    opener: Rc<dyn LinkOpener>,
    cursor: CursorContext,
    cursor_request: Option<CursorRequest>,
}

impl fmt::Debug for Clickable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clickable")
            .field("child", &self.child.name())
            .field("hover", &self.hover)
            .field("link", &self.link)
            .field("outline_shown", &self.outline_shown)
            .finish_non_exhaustive()
    }
}

impl Clickable {
    /// Wrap `child` with a cyan outline and no click action.
    #[must_use]
    pub fn new(child: Box<dyn Component>, interaction: &Interaction) -> Self {
        Self {
            group: Group::new("clickable", Transform::new()),
            child,
            hover: HoverState::new(),
            outline: Some(Outline {
                color: Color::CYAN,
                thickness: DEFAULT_OUTLINE_THICKNESS,
            }),
            outline_shown: false,
            link: None,
            on_click: None,
            on_hover_change: None,
            opener: Rc::clone(&interaction.opener),
            cursor: interaction.cursor.clone(),
            cursor_request: None,
        }
    }

    /// Drive `pause` from the hover state.
    #[must_use]
    pub fn with_pause(mut self, pause: PauseFlag) -> Self {
        self.hover = HoverState::with_pause(pause);
        self
    }

    /// Open `url` in `target` on click.
    #[must_use]
    pub fn with_link(
        mut self,
        url: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.link = Some(Link {
            url: url.into(),
            target: target.into(),
        });
        self
    }

    /// Outline style while hovered; `None` disables the outline.
    #[must_use]
    pub fn with_outline(mut self, outline: Option<Outline>) -> Self {
        self.outline = outline;
        self
    }

    /// Callback run on click when no link is configured.
    #[must_use]
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Observer told about every hover transition.
    #[must_use]
    pub fn on_hover_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_hover_change = Some(Box::new(f));
        self
    }

    /// Whether the pointer is over the wrapped subtree.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    /// Whether the outline is currently shown in the engine.
    #[must_use]
    pub fn outline_shown(&self) -> bool {
        self.outline_shown
    }

    fn click(&mut self) {
        if let Some(link) = &self.link {
            if let Err(e) = self.opener.open(&link.url, &link.target) {
                log::warn!("could not open {}: {e}", link.url);
            }
        } else if let Some(on_click) = &mut self.on_click {
            on_click();
        }
    }

    fn hover_changed(&mut self, hovered: bool) {
        self.cursor_request =
            hovered.then(|| self.cursor.request(CursorStyle::Pointer));
        log::debug!("clickable hovered={hovered}");
        if let Some(observer) = &mut self.on_hover_change {
            observer(hovered);
        }
    }

    fn sync_outline(&mut self, engine: &mut dyn SceneEngine) {
        let wanted = self.hover.is_hovered() && self.outline.is_some();
        if wanted == self.outline_shown {
            return;
        }
        let Some(node) = self.group.node() else {
            return;
        };
        let outline = if wanted { self.outline } else { None };
        match engine.set_outline(node, outline) {
            Ok(()) => self.outline_shown = wanted,
            Err(e) => log::debug!("skipping outline update: {e}"),
        }
    }
}

impl Component for Clickable {
    fn name(&self) -> &'static str {
        "clickable"
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
        self.sync_outline(ctx.engine);
        let child = &mut self.child;
        ctx.nested(self.group.transform.matrix(), |ctx| child.tick(clock, ctx));
    }

    fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter => {
                if self.hover.enter() == HoverTransition::Entered {
                    self.hover_changed(true);
                }
            }
            PointerEvent::Leave => {
                if self.hover.leave() == HoverTransition::Left {
                    self.hover_changed(false);
                }
            }
            PointerEvent::Click => self.click(),
            PointerEvent::Move { .. } => {}
        }
        self.child.pointer(event);
    }

    fn overlays(&self, out: &mut Vec<TooltipOverlay>) {
        self.child.overlays(out);
    }

    fn unmount(&mut self, engine: &mut dyn SceneEngine) {
        self.child.unmount(engine);
        if self.hover.leave() == HoverTransition::Left {
            self.hover_changed(false);
        }
        self.outline_shown = false;
        self.group.unmount(engine);
    }
}
