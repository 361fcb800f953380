//! Scoped cursor-style requests.
//!
//! The cursor is the only process-wide visual state the scene touches.
//! Wrappers never write it directly: they hold a [`CursorRequest`] while
//! hovered, and dropping the request (on leave, or when the wrapper itself
//! is dropped) restores whatever the remaining requests ask for.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::input::CursorStyle;

/// Host side of the cursor (a DOM body, a window, a test recorder).
pub trait CursorHost {
    /// Apply a cursor style.
    fn set_cursor(&mut self, style: CursorStyle);
}

/// Host that only logs, for headless runs.
#[derive(Debug, Default)]
pub struct LogCursorHost;

impl CursorHost for LogCursorHost {
    fn set_cursor(&mut self, style: CursorStyle) {
        log::debug!("cursor -> {}", style.as_css());
    }
}

struct CursorState {
    host: Box<dyn CursorHost>,
    requests: Vec<(u64, CursorStyle)>,
    next_id: u64,
    applied: CursorStyle,
}

impl CursorState {
    fn wanted(&self) -> CursorStyle {
        self.requests
            .last()
            .map_or(CursorStyle::Default, |&(_, style)| style)
    }

    fn sync(&mut self) {
        let wanted = self.wanted();
        if wanted != self.applied {
            self.applied = wanted;
            self.host.set_cursor(wanted);
        }
    }
}

/// Shared handle to the cursor. Clones refer to the same host.
#[derive(Clone)]
pub struct CursorContext {
    state: Rc<RefCell<CursorState>>,
}

impl fmt::Debug for CursorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("CursorContext")
            .field("applied", &state.applied)
            .field("requests", &state.requests.len())
            .finish()
    }
}

impl Default for CursorContext {
    fn default() -> Self {
        Self::new(LogCursorHost)
    }
}

impl CursorContext {
    /// Context driving `host`, starting from the default cursor.
    pub fn new(host: impl CursorHost + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(CursorState {
                host: Box::new(host),
                requests: Vec::new(),
                next_id: 0,
                applied: CursorStyle::Default,
            })),
        }
    }

    /// Ask for `style` until the returned request is dropped. The most
    /// recent live request wins.
    #[must_use = "the cursor is restored as soon as the request is dropped"]
    pub fn request(&self, style: CursorStyle) -> CursorRequest {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.requests.push((id, style));
        state.sync();
        CursorRequest {
            state: Rc::clone(&self.state),
            id,
        }
    }

    /// Style currently applied to the host.
    #[must_use]
    pub fn current(&self) -> CursorStyle {
        self.state.borrow().applied
    }

    /// Number of live requests.
    #[must_use]
    pub fn active_requests(&self) -> usize {
        self.state.borrow().requests.len()
    }
}

/// A live cursor request; releases itself on drop.
pub struct CursorRequest {
    state: Rc<RefCell<CursorState>>,
    id: u64,
}

impl fmt::Debug for CursorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorRequest").field("id", &self.id).finish()
    }
}

impl Drop for CursorRequest {
    fn drop(&mut self) {
        // A host panicking mid-sync would leave the cell borrowed.
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.requests.retain(|&(id, _)| id != self.id);
            state.sync();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<CursorStyle>>>);

    impl CursorHost for Recorder {
        fn set_cursor(&mut self, style: CursorStyle) {
            self.0.borrow_mut().push(style);
        }
    }

    #[test]
    fn request_and_release_restore_default() {
        let recorder = Recorder::default();
        let cursor = CursorContext::new(recorder.clone());
        let request = cursor.request(CursorStyle::Pointer);
        assert_eq!(cursor.current(), CursorStyle::Pointer);
        drop(request);
        assert_eq!(cursor.current(), CursorStyle::Default);
        assert_eq!(
            *recorder.0.borrow(),
            vec![CursorStyle::Pointer, CursorStyle::Default]
        );
    }

    #[test]
    fn overlapping_requests_hold_pointer_until_last_release() {
        let recorder = Recorder::default();
        let cursor = CursorContext::new(recorder.clone());
        let a = cursor.request(CursorStyle::Pointer);
        let b = cursor.request(CursorStyle::Pointer);
        drop(a);
        assert_eq!(cursor.current(), CursorStyle::Pointer);
        drop(b);
        assert_eq!(cursor.current(), CursorStyle::Default);
        assert_eq!(cursor.active_requests(), 0);
        // No redundant host writes while the style did not change.
        assert_eq!(recorder.0.borrow().len(), 2);
    }
}
