//! Color scheme and user choice types

use serde::{Deserialize, Serialize};

/// The concrete scheme actually applied; never `system`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Marker value for CSS-style consumers (a root attribute analog)
    pub fn as_attr(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// The user's declared preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
    /// Follow the operating system's color-scheme signal
    #[default]
    System,
}

impl ThemeChoice {
    /// Resolve against the current system scheme
    pub fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            ThemeChoice::Light => ColorScheme::Light,
            ThemeChoice::Dark => ColorScheme::Dark,
            ThemeChoice::System => system,
        }
    }

    /// The concrete scheme this choice pins, if any
    pub fn as_scheme(self) -> Option<ColorScheme> {
        match self {
            ThemeChoice::Light => Some(ColorScheme::Light),
            ThemeChoice::Dark => Some(ColorScheme::Dark),
            ThemeChoice::System => None,
        }
    }
}

impl From<ColorScheme> for ThemeChoice {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => ThemeChoice::Light,
            ColorScheme::Dark => ThemeChoice::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_always_concrete() {
        for choice in [ThemeChoice::Light, ThemeChoice::Dark, ThemeChoice::System] {
            for system in [ColorScheme::Light, ColorScheme::Dark] {
                let resolved = choice.resolve(system);
                assert!(matches!(resolved, ColorScheme::Light | ColorScheme::Dark));
            }
        }
    }

    #[test]
    fn test_system_tracks_signal() {
        assert_eq!(
            ThemeChoice::System.resolve(ColorScheme::Dark),
            ColorScheme::Dark
        );
        assert_eq!(
            ThemeChoice::Light.resolve(ColorScheme::Dark),
            ColorScheme::Light
        );
    }

    #[test]
    fn test_serde_forms_are_lowercase() {
        #[derive(Serialize)]
        struct Doc {
            theme: ColorScheme,
        }
        let doc = toml::to_string(&Doc {
            theme: ColorScheme::Dark,
        })
        .unwrap();
        assert_eq!(doc.trim(), "theme = \"dark\"");
    }
}
