//! Browser hosts for the cursor and link opener, plus console logging.
//!
//! Only compiled with the `web` feature; the scene core itself never
//! touches the DOM.

use crate::error::SceneError;
use crate::input::CursorStyle;
use crate::interaction::{CursorHost, LinkOpener};

/// Route `log` output to the browser console and panics to
/// `console.error`. Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

fn window() -> Result<web_sys::Window, SceneError> {
    web_sys::window().ok_or_else(|| SceneError::Web("no global window".to_owned()))
}

/// Writes the cursor style onto `document.body`.
#[derive(Debug, Default)]
pub struct DomCursor;

impl DomCursor {
    fn apply(style: CursorStyle) -> Result<(), SceneError> {
        let body = window()?
            .document()
            .and_then(|doc| doc.body())
            .ok_or_else(|| SceneError::Web("no document body".to_owned()))?;
        body.style()
            .set_property("cursor", style.as_css())
            .map_err(|e| SceneError::Web(format!("{e:?}")))
    }
}

impl CursorHost for DomCursor {
    fn set_cursor(&mut self, style: CursorStyle) {
        if let Err(e) = Self::apply(style) {
            log::warn!("cursor update failed: {e}");
        }
    }
}

/// Opens links with `window.open`.
#[derive(Debug, Default)]
pub struct WindowLinkOpener;

impl LinkOpener for WindowLinkOpener {
    fn open(&self, url: &str, target: &str) -> Result<(), SceneError> {
        let opened = window()?
            .open_with_url_and_target(url, target)
            .map_err(|e| SceneError::Web(format!("{e:?}")))?;
        if opened.is_none() {
            // Popup blockers return null rather than throwing.
            log::warn!("window.open({url}) was blocked");
        }
        Ok(())
    }
}
