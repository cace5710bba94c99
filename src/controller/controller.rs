//! The theme controller.

use crate::store::{Persistence, THEME_KEY};
use crate::target::{ThemeTarget, ToggleVisual};
use crate::theme::Theme;

use super::transition::{ToggleOutcome, TransitionState, TOGGLE_TRANSITION};

/// Owns the current theme and keeps the store and the surface in sync.
///
/// The controller restores the persisted preference at construction, applies
/// every change to both collaborators, and gates toggle requests so at most
/// one transition animates at a time. It never spawns or sleeps: an accepted
/// toggle returns the settle delay and the host's event loop calls
/// [`finish_transition`](ThemeController::finish_transition) when its timer
/// fires.
///
/// # Example
///
/// ```rust
/// use nightshift::{DomTarget, MemoryStore, Theme, ThemeController};
///
/// let mut controller = ThemeController::new(MemoryStore::new(), DomTarget::new());
/// assert_eq!(controller.theme(), Theme::Light);
///
/// let outcome = controller.toggle_theme();
/// assert!(outcome.is_accepted());
/// assert_eq!(controller.theme(), Theme::Dark);
///
/// // the host's timer fires after `settle_after`
/// controller.finish_transition();
/// assert!(!controller.is_transitioning());
/// ```
#[derive(Debug)]
pub struct ThemeController<P, T> {
    store: P,
    target: T,
    theme: Theme,
    transition: TransitionState,
    interactive: bool,
}

impl<P: Persistence, T: ThemeTarget> ThemeController<P, T> {
    /// Creates a controller, restoring the persisted theme.
    ///
    /// An empty store starts light. Pass
    /// [`detect_system_theme()`](crate::detect_system_theme) to
    /// [`with_default`](ThemeController::with_default) to follow the OS
    /// preference on first run instead.
    pub fn new(store: P, target: T) -> Self {
        Self::with_default(store, target, Theme::Light)
    }

    /// Creates a controller that starts on `default` when the store is empty.
    ///
    /// An unrecognized stored value is logged and treated as light, not as
    /// `default`: it means the store was written by something else, and
    /// light is the contract's fallback.
    pub fn with_default(store: P, target: T, default: Theme) -> Self {
        let theme = match store.get(THEME_KEY) {
            Some(raw) => Theme::from_persisted(&raw),
            None => default,
        };

        let mut controller = Self {
            store,
            target,
            theme,
            transition: TransitionState::Idle,
            interactive: true,
        };
        controller.store.set(THEME_KEY, theme.as_str());
        controller.interactive = controller.sync();
        if !controller.interactive {
            tracing::warn!("theme toggle control not found, interactive toggling disabled");
        }
        controller
    }

    /// Applies `theme`, writing the store before touching the surface.
    ///
    /// Always succeeds and is idempotent. When this returns, the controller,
    /// the store and the surface marker all agree on `theme`.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(THEME_KEY, theme.as_str());
        self.sync();
    }

    /// Requests a theme toggle.
    ///
    /// While a transition is animating the request is dropped, not queued.
    /// On accept the theme flips and persists immediately; only the
    /// `animating` marker outlives the call, until the host schedules the
    /// one [`finish_transition`](ThemeController::finish_transition) call
    /// `settle_after` later.
    pub fn toggle_theme(&mut self) -> ToggleOutcome {
        if self.transition == TransitionState::Transitioning {
            return ToggleOutcome::Dropped;
        }

        self.transition = TransitionState::Transitioning;
        self.set_theme(self.theme.flip());
        ToggleOutcome::Accepted {
            settle_after: TOGGLE_TRANSITION,
        }
    }

    /// Settles the running transition, clearing the `animating` marker.
    ///
    /// Calling while idle is a no-op, so a stale timer can never clear a
    /// later toggle's animation. If the toggle control left the surface
    /// mid-transition, the surface's existence guard absorbs the update.
    pub fn finish_transition(&mut self) {
        if self.transition == TransitionState::Idle {
            return;
        }
        self.transition = TransitionState::Idle;
        self.sync();
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether a toggle transition is currently animating.
    pub fn is_transitioning(&self) -> bool {
        self.transition == TransitionState::Transitioning
    }

    /// Whether a toggle control was present at construction.
    ///
    /// When `false` the controller still manages theme state; there is just
    /// no control for the host to bind an activation event to.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// The preference store.
    pub fn store(&self) -> &P {
        &self.store
    }

    /// The presentation surface.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable surface access, for hosts that render through it.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    // Pushes the theme and the current toggle markers to the surface.
    // Returns whether a toggle control was there to receive them.
    fn sync(&mut self) -> bool {
        self.target.apply_theme(self.theme);
        self.target.set_toggle_visual(ToggleVisual {
            dark: self.theme.is_dark(),
            animating: self.transition == TransitionState::Transitioning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::target::{DomTarget, CLASS_ANIMATING, CLASS_DARK};

    fn controller() -> ThemeController<MemoryStore, DomTarget> {
        ThemeController::new(MemoryStore::new(), DomTarget::new())
    }

    #[test]
    fn test_empty_store_starts_light() {
        let controller = controller();
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.target().data_theme(), Some(Theme::Light));
    }

    #[test]
    fn test_init_restores_persisted_theme() {
        let store = MemoryStore::new().with(THEME_KEY, "dark");
        let controller = ThemeController::new(store, DomTarget::new());

        assert_eq!(controller.theme(), Theme::Dark);
        assert!(controller.target().toggle_has_class(CLASS_DARK));
    }

    #[test]
    fn test_init_with_unrecognized_value_falls_back_to_light() {
        let store = MemoryStore::new().with(THEME_KEY, "solarized");
        let controller = ThemeController::new(store, DomTarget::new());
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn test_with_default_applies_when_store_empty() {
        let controller =
            ThemeController::with_default(MemoryStore::new(), DomTarget::new(), Theme::Dark);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(
            controller.store().get(THEME_KEY).as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_with_default_yields_to_persisted_value() {
        let store = MemoryStore::new().with(THEME_KEY, "light");
        let controller = ThemeController::with_default(store, DomTarget::new(), Theme::Dark);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn test_set_theme_updates_surface_and_store() {
        let mut controller = controller();
        controller.set_theme(Theme::Dark);

        assert_eq!(controller.target().data_theme(), Some(Theme::Dark));
        assert_eq!(controller.store().get(THEME_KEY).as_deref(), Some("dark"));
        assert!(controller.target().toggle_has_class(CLASS_DARK));
    }

    #[test]
    fn test_set_theme_is_idempotent() {
        let mut controller = controller();
        controller.set_theme(Theme::Dark);
        controller.set_theme(Theme::Dark);

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.target().data_theme(), Some(Theme::Dark));
        assert_eq!(controller.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_flips_and_raises_animating_marker() {
        let mut controller = controller();

        let outcome = controller.toggle_theme();
        assert!(outcome.is_accepted());
        assert_eq!(controller.theme(), Theme::Dark);
        assert!(controller.is_transitioning());
        assert!(controller.target().toggle_has_class(CLASS_ANIMATING));

        controller.finish_transition();
        assert!(!controller.is_transitioning());
        assert!(!controller.target().toggle_has_class(CLASS_ANIMATING));
        assert!(controller.target().toggle_has_class(CLASS_DARK));
    }

    #[test]
    fn test_second_toggle_while_transitioning_is_dropped() {
        let mut controller = controller();

        assert!(controller.toggle_theme().is_accepted());
        assert_eq!(controller.toggle_theme(), ToggleOutcome::Dropped);
        assert_eq!(controller.theme(), Theme::Dark);

        controller.finish_transition();
        assert!(controller.toggle_theme().is_accepted());
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn test_finish_transition_while_idle_is_noop() {
        let mut controller = controller();
        controller.finish_transition();
        assert_eq!(controller.theme(), Theme::Light);
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn test_missing_control_leaves_controller_functional() {
        let mut controller = ThemeController::new(MemoryStore::new(), DomTarget::without_toggle());
        assert!(!controller.is_interactive());

        controller.set_theme(Theme::Dark);
        assert_eq!(controller.target().data_theme(), Some(Theme::Dark));
        assert_eq!(controller.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_control_removed_mid_transition() {
        let mut controller = controller();
        assert!(controller.toggle_theme().is_accepted());

        controller.target_mut().remove_toggle();
        controller.finish_transition();

        assert!(!controller.is_transitioning());
        assert_eq!(controller.target().data_theme(), Some(Theme::Dark));
    }
}
