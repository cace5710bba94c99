//! Console-styled terminal surface.

use console::Style;

use super::{ThemeTarget, ToggleVisual};
use crate::theme::Theme;

const GLYPH_LIGHT: &str = "☀";
const GLYPH_DARK: &str = "☾";

/// A terminal surface that renders the theme as a styled indicator glyph.
///
/// The indicator is the terminal world's toggle control: a sun while the
/// light theme is active, a moon for dark, dimmed while a toggle transition
/// animates. Embed it in a prompt or status line and re-render after each
/// controller call.
///
/// # Example
///
/// ```rust
/// use nightshift::{TermTarget, Theme, ThemeTarget};
///
/// let mut term = TermTarget::new();
/// term.apply_theme(Theme::Dark);
/// assert!(term.indicator().contains("☾"));
/// ```
#[derive(Debug, Clone)]
pub struct TermTarget {
    light: Style,
    dark: Style,
    active: Theme,
    visual: ToggleVisual,
}

impl TermTarget {
    /// Creates a terminal surface with the default indicator styles:
    /// a yellow sun and a blue moon.
    pub fn new() -> Self {
        Self::with_styles(Style::new().yellow(), Style::new().blue())
    }

    /// Creates a terminal surface with custom indicator styles.
    pub fn with_styles(light: Style, dark: Style) -> Self {
        Self {
            light,
            dark,
            active: Theme::default(),
            visual: ToggleVisual::default(),
        }
    }

    /// Renders the current indicator glyph with its style applied.
    pub fn indicator(&self) -> String {
        let (style, glyph) = match self.active {
            Theme::Light => (&self.light, GLYPH_LIGHT),
            Theme::Dark => (&self.dark, GLYPH_DARK),
        };
        let style = if self.visual.animating {
            style.clone().dim()
        } else {
            style.clone()
        };
        style.apply_to(glyph).to_string()
    }

    /// The theme the surface currently renders.
    pub fn active_theme(&self) -> Theme {
        self.active
    }
}

impl Default for TermTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeTarget for TermTarget {
    fn apply_theme(&mut self, theme: Theme) {
        self.active = theme;
    }

    fn set_toggle_visual(&mut self, visual: ToggleVisual) -> bool {
        self.visual = visual;
        true
    }
}
