//! System theme detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::theme::Theme;

type ThemeDetector = fn() -> Theme;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine the system theme.
///
/// This is useful for testing or when you want to force a specific theme.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Returns the theme the operating system currently prefers.
///
/// A fresh controller defaults to light when nothing is persisted; hosts
/// that want the first run to follow the OS instead pass this to
/// [`ThemeController::with_default`](crate::ThemeController::with_default).
pub fn detect_system_theme() -> Theme {
    let detector = THEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_theme_detector() -> Theme {
    match detect_os_theme() {
        OsThemeMode::Dark => Theme::Dark,
        OsThemeMode::Light => Theme::Light,
    }
}
