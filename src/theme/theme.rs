//! The theme value and its canonical text forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The visual mode a surface renders in.
///
/// `Light` and `Dark` are the only valid values. The default is `Light`,
/// which is also what a controller starts on when nothing has been
/// persisted yet.
///
/// # Example
///
/// ```rust
/// use nightshift::Theme;
///
/// assert_eq!(Theme::Light.flip(), Theme::Dark);
/// assert_eq!(Theme::Dark.as_str(), "dark");
/// assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    pub fn flip(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns `true` for [`Theme::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The canonical text form, `"light"` or `"dark"`.
    ///
    /// This is the exact string written to and read from the preference
    /// store, so it round-trips through [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Reads a theme from a value found in the preference store.
    ///
    /// The store is owned by the controller, so anything other than the two
    /// canonical forms means some other writer touched it. That is worth a
    /// warning but not a failure: the value falls back to `Light` and the
    /// next write restores a canonical form.
    pub fn from_persisted(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(value = raw, "unrecognized stored theme, falling back to light");
            Theme::Light
        })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a theme from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme '{0}', expected 'light' or 'dark'")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_round_trips() {
        assert_eq!(Theme::Light.flip(), Theme::Dark);
        assert_eq!(Theme::Dark.flip(), Theme::Light);
        assert_eq!(Theme::Light.flip().flip(), Theme::Light);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_parse_canonical_forms() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "solarized".parse::<Theme>().unwrap_err();
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn test_from_persisted_falls_back_to_light() {
        assert_eq!(Theme::from_persisted("dark"), Theme::Dark);
        assert_eq!(Theme::from_persisted("solarized"), Theme::Light);
        assert_eq!(Theme::from_persisted(""), Theme::Light);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}
