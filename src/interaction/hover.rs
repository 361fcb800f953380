use std::{cell::Cell, rc::Rc};

/// Shared "paused" switch handed from an interaction wrapper to the motion
/// primitives it encloses.
///
/// The wrapper is the only writer; motion primitives only read it. Clones
/// share the same cell.
#[derive(Debug, Clone, Default)]
pub struct PauseFlag(Rc<Cell<bool>>);

impl PauseFlag {
    /// New flag, not paused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether motion should hold still.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.0.get()
    }

    /// Raise or lower the flag.
    pub fn set(&self, paused: bool) {
        self.0.set(paused);
    }

    /// Whether two flags share the same cell.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Hover phase of an interaction wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPhase {
    /// Pointer outside the wrapped subtree.
    #[default]
    Idle,
    /// Pointer over the wrapped subtree.
    Hovered,
}

/// Result of feeding an enter/leave event to a [`HoverState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    /// Idle → Hovered.
    Entered,
    /// Hovered → Idle.
    Left,
    /// Event matched the current phase; nothing changed.
    Unchanged,
}

/// Two-state hover machine that mirrors itself into an optional
/// [`PauseFlag`].
///
/// Repeated enters (or leaves) are absorbed, so `paused == hovered` holds
/// even if the dispatcher fails to pair events.
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    phase: HoverPhase,
    pause: Option<PauseFlag>,
}

impl HoverState {
    /// Idle state with no pause flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle state that drives `pause`. The flag is lowered immediately.
    #[must_use]
    pub fn with_pause(pause: PauseFlag) -> Self {
        pause.set(false);
        Self {
            phase: HoverPhase::Idle,
            pause: Some(pause),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    /// Whether the pointer is over the subtree.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.phase == HoverPhase::Hovered
    }

    /// Pointer entered.
    pub fn enter(&mut self) -> HoverTransition {
        self.set_phase(HoverPhase::Hovered)
    }

    /// Pointer left.
    pub fn leave(&mut self) -> HoverTransition {
        self.set_phase(HoverPhase::Idle)
    }

    fn set_phase(&mut self, phase: HoverPhase) -> HoverTransition {
        if self.phase == phase {
            return HoverTransition::Unchanged;
        }
        self.phase = phase;
        let hovered = phase == HoverPhase::Hovered;
        if let Some(pause) = &self.pause {
            pause.set(hovered);
        }
        if hovered {
            HoverTransition::Entered
        } else {
            HoverTransition::Left
        }
    }
}
