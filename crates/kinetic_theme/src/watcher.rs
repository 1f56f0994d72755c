//! System scheme watcher
//!
//! Polls a [`SchemeSource`] and pushes changes into the manager. Polling
//! keeps the toolkit free of platform event-loop integration; hosts with a
//! native change notification can skip the watcher and call
//! [`ThemeManager::system_scheme_changed`] directly.

use crate::manager::ThemeManager;
use crate::scheme::ColorScheme;
use crate::source::SchemeSource;
use std::time::{Duration, Instant};

/// Polling configuration
#[derive(Clone, Copy, Debug)]
pub struct WatcherConfig {
    /// Minimum time between probes of the underlying signal
    pub interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
        }
    }
}

/// Tracks the system signal and forwards transitions
pub struct SystemSchemeWatcher {
    source: Box<dyn SchemeSource>,
    config: WatcherConfig,
    last_seen: ColorScheme,
    last_probe: Option<Instant>,
}

impl SystemSchemeWatcher {
    pub fn new(source: Box<dyn SchemeSource>, config: WatcherConfig) -> Self {
        let last_seen = source.current();
        Self {
            source,
            config,
            last_seen,
            last_probe: None,
        }
    }

    /// The scheme observed at the last probe
    pub fn last_seen(&self) -> ColorScheme {
        self.last_seen
    }

    /// Probe if the interval has elapsed; returns true when a change was
    /// forwarded to the manager
    pub fn poll(&mut self, manager: &mut ThemeManager) -> bool {
        let now = Instant::now();
        if let Some(last) = self.last_probe {
            if now.duration_since(last) < self.config.interval {
                return false;
            }
        }
        self.last_probe = Some(now);
        self.probe(manager)
    }

    /// Probe immediately, ignoring the interval
    pub fn poll_now(&mut self, manager: &mut ThemeManager) -> bool {
        self.last_probe = Some(Instant::now());
        self.probe(manager)
    }

    fn probe(&mut self, manager: &mut ThemeManager) -> bool {
        let current = self.source.current();
        if current == self.last_seen {
            return false;
        }
        tracing::debug!(from = ?self.last_seen, to = ?current, "system scheme changed");
        self.last_seen = current;
        manager.system_scheme_changed(current);
        true
    }
}
