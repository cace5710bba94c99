//! The theme controller and its transition state machine.
//!
//! This module provides:
//!
//! - [`ThemeController`]: Owns the theme, the store and the surface
//! - [`TransitionState`]: The {idle, transitioning} animation cycle
//! - [`ToggleOutcome`]: What a toggle request resulted in
//! - [`TOGGLE_TRANSITION`]: The settle delay for accepted toggles

#[allow(clippy::module_inception)]
mod controller;
mod transition;

pub use controller::ThemeController;
pub use transition::{ToggleOutcome, TransitionState, TOGGLE_TRANSITION};
