//! Toggle transition state machine types.

use std::time::Duration;

/// How long a toggle transition animates before it settles.
///
/// Matches the visual transition duration in the accompanying stylesheets,
/// so the `animating` marker is cleared just as the control stops moving.
pub const TOGGLE_TRANSITION: Duration = Duration::from_millis(400);

/// Where the controller is in the toggle animation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    /// No transition running; toggle requests are accepted.
    #[default]
    Idle,
    /// A toggle is animating; further requests are dropped.
    Transitioning,
}

/// The result of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an accepted toggle obliges the host to schedule finish_transition"]
pub enum ToggleOutcome {
    /// The toggle was accepted and the theme has already flipped.
    ///
    /// The host owes the controller exactly one
    /// [`finish_transition`](crate::ThemeController::finish_transition) call
    /// once `settle_after` has elapsed.
    Accepted {
        /// Delay before the transition settles.
        settle_after: Duration,
    },
    /// A transition was already running; the request was dropped, not queued.
    Dropped,
}

impl ToggleOutcome {
    /// Whether the toggle was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ToggleOutcome::Accepted { .. })
    }
}
