//! System color-scheme signal
//!
//! The operating system's "prefers dark" signal, behind a trait so tests
//! and headless hosts can substitute their own. Detection failures fall
//! back to light; a wrong guess is recoverable, a crash is not.

use crate::scheme::ColorScheme;
use std::sync::{Arc, Mutex};

/// A readable color-scheme signal
pub trait SchemeSource: Send {
    fn current(&self) -> ColorScheme;
}

/// The live operating-system signal
#[derive(Debug, Default)]
pub struct SystemSchemeSource;

impl SchemeSource for SystemSchemeSource {
    fn current(&self) -> ColorScheme {
        detect_system_color_scheme()
    }
}

/// A fixed or externally-driven signal for tests
///
/// Cloning shares the underlying value, so a test can flip the scheme while
/// a watcher holds the other clone.
#[derive(Clone, Debug)]
pub struct SharedSchemeSource {
    value: Arc<Mutex<ColorScheme>>,
}

impl SharedSchemeSource {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            value: Arc::new(Mutex::new(scheme)),
        }
    }

    pub fn set(&self, scheme: ColorScheme) {
        *self.value.lock().unwrap() = scheme;
    }
}

impl SchemeSource for SharedSchemeSource {
    fn current(&self) -> ColorScheme {
        *self.value.lock().unwrap()
    }
}

/// Detect the current system color scheme
///
/// - Linux: the desktop color-scheme setting via `gsettings`
/// - macOS: `AppleInterfaceStyle` (only present when dark)
/// - Windows: the `AppsUseLightTheme` registry value
/// - Anything else, or any probe failure: light
pub fn detect_system_color_scheme() -> ColorScheme {
    match probe_system() {
        Some(scheme) => scheme,
        None => {
            tracing::debug!("system color scheme unavailable, defaulting to light");
            ColorScheme::Light
        }
    }
}

#[cfg(target_os = "linux")]
fn probe_system() -> Option<ColorScheme> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let setting = String::from_utf8_lossy(&output.stdout);
    Some(if setting.contains("dark") {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    })
}

#[cfg(target_os = "macos")]
fn probe_system() -> Option<ColorScheme> {
    // The key only exists while dark mode is active
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    Some(if output.status.success() {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    })
}

#[cfg(target_os = "windows")]
fn probe_system() -> Option<ColorScheme> {
    let output = std::process::Command::new("reg")
        .args([
            "query",
            r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout);
    Some(if text.contains("0x0") {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    })
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn probe_system() -> Option<ColorScheme> {
    None
}
