//! Presentation surfaces the controller applies themes to.
//!
//! This module provides:
//!
//! - [`ThemeTarget`]: The capability trait the controller drives
//! - [`ToggleVisual`]: The toggle control's two marker flags
//! - [`DomTarget`]: A document-shaped surface (root attribute + class list)
//! - [`TermTarget`]: A console-styled terminal indicator

mod dom;
mod term;

pub use dom::{DomTarget, CLASS_ANIMATING, CLASS_DARK};
pub use term::TermTarget;

use crate::theme::Theme;

/// Visual state of the toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleVisual {
    /// The control shows its dark-mode face.
    pub dark: bool,
    /// A toggle transition is currently animating.
    pub animating: bool,
}

/// A surface that renders the active theme.
///
/// The controller drives implementations through two calls:
/// [`apply_theme`](ThemeTarget::apply_theme) sets the surface-wide marker and
/// [`set_toggle_visual`](ThemeTarget::set_toggle_visual) synchronizes the
/// toggle control. A surface without a toggle control reports that by
/// returning `false`, which disables interactive toggling and nothing else.
pub trait ThemeTarget {
    /// Applies `theme` to the whole surface.
    fn apply_theme(&mut self, theme: Theme);

    /// Synchronizes the toggle control's visual markers.
    ///
    /// Returns whether a toggle control existed to receive them. The
    /// controller checks this at construction to warn about a missing
    /// control, and relies on it as the existence guard when the deferred
    /// animation clear lands after the control has gone away.
    fn set_toggle_visual(&mut self, visual: ToggleVisual) -> bool;
}
