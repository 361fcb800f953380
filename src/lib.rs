// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Motion, lighting and hover-interaction core for an interactive 3D
//! portfolio scene.
//!
//! Rendering, asset decoding, shadows, bloom and hit-testing belong to an
//! external scene-graph engine reached through [`scene::SceneEngine`]. This
//! crate owns what happens between frames: orbiting, bobbing and spinning
//! transforms, orbiting and hover-triggered lights, and the hover/click
//! state that pauses motion and drives outlines, tooltips and the cursor.
//!
//! # Key entry points
//!
//! - [`scene::Scene`] - mounts components and runs the frame loop
//! - [`scene::compose`] - assembles the portfolio scene from options
//! - [`options::SceneOptions`] - scene configuration with TOML presets
//! - [`motion`] - per-frame motion primitives
//! - [`interaction`] - hover state, pause flags, cursor scoping, tooltips
//! - [`lighting`] - static, floating, hover and orbit-rig lights
//!
//! # Frame model
//!
//! Everything runs on one thread. Each call to [`scene::Scene::frame`]
//! ticks mounted components in mount order with a
//! [`util::frame_timing::FrameClock`]. Pointer events routed through
//! [`scene::Scene::dispatch`] only write hover and pointer state; the next
//! tick turns that state into engine updates.

pub mod error;
pub mod input;
pub mod interaction;
pub mod lighting;
pub mod motion;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::SceneError;
