//! Document-shaped surface.

use std::collections::BTreeSet;

use super::{ThemeTarget, ToggleVisual};
use crate::theme::Theme;

/// Class name for the toggle control's dark-mode face.
pub const CLASS_DARK: &str = "dark";

/// Class name carried by the toggle control while a transition animates.
pub const CLASS_ANIMATING: &str = "animating";

/// A document-shaped surface: a root `data-theme` attribute and an optional
/// toggle element whose class list carries the visual markers.
///
/// This is the shape stylesheets consume. The root attribute selects the
/// palette; [`CLASS_DARK`] and [`CLASS_ANIMATING`] on the toggle element
/// drive the control's own transition. Hosts with a real document mirror
/// these two mutations into it; tests read them directly.
///
/// # Example
///
/// ```rust
/// use nightshift::{DomTarget, Theme, ThemeTarget, ToggleVisual};
///
/// let mut dom = DomTarget::new();
/// dom.apply_theme(Theme::Dark);
/// dom.set_toggle_visual(ToggleVisual { dark: true, animating: false });
///
/// assert_eq!(dom.data_theme(), Some(Theme::Dark));
/// assert!(dom.toggle_has_class("dark"));
/// ```
#[derive(Debug, Clone)]
pub struct DomTarget {
    data_theme: Option<Theme>,
    toggle: Option<ToggleElement>,
}

#[derive(Debug, Clone, Default)]
struct ToggleElement {
    classes: BTreeSet<String>,
}

impl ToggleElement {
    fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }
}

impl DomTarget {
    /// Creates a document with a toggle control present.
    pub fn new() -> Self {
        Self {
            data_theme: None,
            toggle: Some(ToggleElement::default()),
        }
    }

    /// Creates a document without a toggle control.
    pub fn without_toggle() -> Self {
        Self {
            data_theme: None,
            toggle: None,
        }
    }

    /// Removes the toggle control, as when the element leaves the document
    /// mid-session.
    pub fn remove_toggle(&mut self) {
        self.toggle = None;
    }

    /// The root `data-theme` attribute, if a theme has been applied.
    pub fn data_theme(&self) -> Option<Theme> {
        self.data_theme
    }

    /// Whether a toggle control is currently present.
    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    /// Whether the toggle control currently carries `class`.
    ///
    /// Always `false` when the control is absent.
    pub fn toggle_has_class(&self, class: &str) -> bool {
        self.toggle
            .as_ref()
            .is_some_and(|toggle| toggle.classes.contains(class))
    }
}

impl Default for DomTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeTarget for DomTarget {
    fn apply_theme(&mut self, theme: Theme) {
        self.data_theme = Some(theme);
    }

    fn set_toggle_visual(&mut self, visual: ToggleVisual) -> bool {
        let Some(toggle) = self.toggle.as_mut() else {
            return false;
        };
        toggle.set_class(CLASS_DARK, visual.dark);
        toggle.set_class(CLASS_ANIMATING, visual.animating);
        true
    }
}
