/// Platform-agnostic pointer events scoped to one hit-tested region.
///
/// The engine decides which mounted component is under the pointer and the
/// host routes the event there with
/// [`Scene::dispatch`](crate::scene::Scene::dispatch).
///
/// # Example
///
/// ```ignore
/// scene.dispatch(rock, PointerEvent::Enter);
/// scene.dispatch(rock, PointerEvent::Move { x: 412.0, y: 230.0 });
/// scene.dispatch(rock, PointerEvent::Click);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the region.
    Enter,
    /// Pointer left the region.
    Leave,
    /// Pointer moved inside the region.
    Move {
        /// Horizontal position in CSS pixels from the viewport's left edge.
        x: f32,
        /// Vertical position in CSS pixels from the viewport's top edge.
        y: f32,
    },
    /// Primary button clicked inside the region.
    Click,
}

impl PointerEvent {
    /// Short name for log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Leave => "leave",
            Self::Move { .. } => "move",
            Self::Click => "click",
        }
    }
}

/// Mouse cursor shapes the scene asks the host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorStyle {
    /// Platform default arrow.
    #[default]
    Default,
    /// Hand cursor signalling a clickable object.
    Pointer,
}

impl CursorStyle {
    /// CSS `cursor` property value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
        }
    }
}
