//! Pointer-driven interaction: hover state, pause flags, scoped cursor
//! requests, click handling and tooltips.

/// Hover/click wrapper with outline and link support.
pub mod clickable;
pub mod cursor;
/// Hover state machine and the shared pause flag.
pub mod hover;
/// Pointer-following tooltip wrapper.
pub mod tooltip;

use std::rc::Rc;

pub use clickable::{Clickable, Link, LinkOpener, LogLinkOpener};
pub use cursor::{CursorContext, CursorHost, CursorRequest, LogCursorHost};
pub use hover::{HoverPhase, HoverState, HoverTransition, PauseFlag};
pub use tooltip::{HoverTooltip, TooltipOverlay};

/// Host services shared by every interaction wrapper in a scene.
#[derive(Clone)]
pub struct Interaction {
    /// Cursor the wrappers request styles from.
    pub cursor: CursorContext,
    /// Opener used for link clicks.
    pub opener: Rc<dyn LinkOpener>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            cursor: CursorContext::default(),
            opener: Rc::new(LogLinkOpener),
        }
    }
}

impl Interaction {
    /// Services backed by the given cursor and opener.
    pub fn new(cursor: CursorContext, opener: Rc<dyn LinkOpener>) -> Self {
        Self { cursor, opener }
    }
}
