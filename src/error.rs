//! Crate-level error types.

use std::fmt;

use crate::scene::NodeId;

/// Errors produced by the starfolio crate.
#[derive(Debug)]
pub enum SceneError {
    /// A model or texture could not be loaded by the engine.
    AssetLoad {
        /// Path the engine was asked to load.
        path: String,
        /// Engine-supplied reason.
        reason: String,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A color string was not `#rgb` or `#rrggbb` hex.
    InvalidColor(String),
    /// The engine has no node with this id (detached or never attached).
    UnknownNode(NodeId),
    /// Browser API failure (cursor style, window.open).
    Web(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetLoad { path, reason } => {
                write!(f, "failed to load asset {path}: {reason}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidColor(value) => {
                write!(f, "invalid color {value:?}, expected #rrggbb")
            }
            Self::UnknownNode(id) => write!(f, "unknown scene node {id}"),
            Self::Web(msg) => write!(f, "browser error: {msg}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
