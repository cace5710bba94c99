//! Light/dark theme switching with persisted preference and gated toggle
//! transitions.
//!
//! This crate provides:
//!
//! - [`Theme`]: The light or dark theme value
//! - [`ThemeController`]: Restores, persists and applies the theme, and
//!   gates toggle animations so only one runs at a time
//! - [`Persistence`] and [`ThemeTarget`]: Narrow capability traits for the
//!   preference store and the presentation surface, so the controller runs
//!   against fakes in tests and against whatever the host actually has
//! - [`MemoryStore`] and [`FileStore`]: Store implementations
//! - [`DomTarget`] and [`TermTarget`]: Surface implementations
//! - [`detect_system_theme`]: OS preference detection via `dark-light`
//!
//! The controller is deliberately host-driven: it never spawns or sleeps.
//! An accepted toggle returns the settle delay ([`TOGGLE_TRANSITION`]) and
//! the host's event loop calls
//! [`finish_transition`](ThemeController::finish_transition) when its timer
//! fires. A second toggle arriving before that is dropped, not queued.
//!
//! # Example
//!
//! ```rust
//! use nightshift::{DomTarget, MemoryStore, Theme, ThemeController, ToggleOutcome};
//!
//! let mut controller = ThemeController::new(MemoryStore::new(), DomTarget::new());
//! assert_eq!(controller.theme(), Theme::Light);
//!
//! match controller.toggle_theme() {
//!     ToggleOutcome::Accepted { settle_after } => {
//!         // schedule a one-shot timer for `settle_after`, then:
//!         controller.finish_transition();
//!     }
//!     ToggleOutcome::Dropped => {}
//! }
//!
//! assert_eq!(controller.theme(), Theme::Dark);
//! assert_eq!(controller.target().data_theme(), Some(Theme::Dark));
//! ```

mod controller;
mod store;
mod target;
mod theme;

pub use controller::{ThemeController, ToggleOutcome, TransitionState, TOGGLE_TRANSITION};
pub use store::{FileStore, MemoryStore, Persistence, StoreError, THEME_KEY};
pub use target::{DomTarget, TermTarget, ThemeTarget, ToggleVisual, CLASS_ANIMATING, CLASS_DARK};
pub use theme::{detect_system_theme, set_theme_detector, ParseThemeError, Theme};
