//! Theme state manager
//!
//! One owned state object with an explicit lifecycle, injected where it is
//! needed instead of living in a module global. The manager owns the store
//! and the system signal; read-only consumers hold cheap [`ThemeHandle`]
//! clones. Shutting the manager down deactivates every handle, and a read
//! through a deactivated handle panics: that is a wiring defect, not a
//! runtime condition to recover from.

use crate::scheme::{ColorScheme, ThemeChoice};
use crate::source::SchemeSource;
use crate::store::PreferenceStore;
use kinetic_core::Subscription;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

type SchemeListener = Arc<dyn Fn(ColorScheme) + Send + Sync>;

struct ThemeShared {
    active: AtomicBool,
    resolved: RwLock<ColorScheme>,
    listeners: Mutex<Vec<(u64, SchemeListener)>>,
    next_listener_id: Mutex<u64>,
}

impl ThemeShared {
    /// Notify a snapshot of the current listeners with the lock released,
    /// so a listener may drop subscriptions (its own included) mid-call.
    /// Removals during notification take effect from the next batch.
    fn notify(&self, resolved: ColorScheme) {
        let batch: Vec<SchemeListener> = {
            let listeners = self.listeners.lock().unwrap();
            listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in batch {
            listener(resolved);
        }
    }
}

/// Read-only access to the resolved scheme
///
/// Handles stay valid for the manager's lifetime; after
/// [`ThemeManager::shutdown`] (or drop) every read panics.
#[derive(Clone)]
pub struct ThemeHandle {
    shared: Arc<ThemeShared>,
}

impl ThemeHandle {
    /// The concrete scheme currently applied
    ///
    /// # Panics
    ///
    /// Panics if the owning manager has been torn down: the caller outlived
    /// the theme scope it was wired into.
    pub fn resolved(&self) -> ColorScheme {
        self.try_resolved().expect(
            "theme manager torn down; resolved theme was read outside its active scope",
        )
    }

    /// Non-panicking probe, for callers that legitimately race teardown
    pub fn try_resolved(&self) -> Option<ColorScheme> {
        if !self.shared.active.load(Ordering::SeqCst) {
            return None;
        }
        Some(*self.shared.resolved.read().unwrap())
    }

    /// Root-marker value for CSS-style consumers: `"light"` or `"dark"`
    pub fn resolved_attr(&self) -> &'static str {
        self.resolved().as_attr()
    }
}

/// Owns the theme preference state, its persistence, and the system signal
pub struct ThemeManager {
    shared: Arc<ThemeShared>,
    choice: ThemeChoice,
    store: Box<dyn PreferenceStore>,
    source: Box<dyn SchemeSource>,
}

impl ThemeManager {
    /// Initialize from persisted state
    ///
    /// A stored concrete scheme becomes the choice; absent or unreadable
    /// storage means `system`. Storage failures are logged and degrade,
    /// never propagate.
    pub fn init(store: Box<dyn PreferenceStore>, source: Box<dyn SchemeSource>) -> Self {
        let choice = match store.load() {
            Ok(Some(scheme)) => ThemeChoice::from(scheme),
            Ok(None) => ThemeChoice::System,
            Err(err) => {
                tracing::warn!("theme preference unreadable, following system: {err}");
                ThemeChoice::System
            }
        };
        let resolved = choice.resolve(source.current());
        tracing::debug!(?choice, ?resolved, "theme manager initialized");

        Self {
            shared: Arc::new(ThemeShared {
                active: AtomicBool::new(true),
                resolved: RwLock::new(resolved),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: Mutex::new(0),
            }),
            choice,
            store,
            source,
        }
    }

    /// A read handle for consumers
    pub fn handle(&self) -> ThemeHandle {
        ThemeHandle {
            shared: self.shared.clone(),
        }
    }

    pub fn choice(&self) -> ThemeChoice {
        self.choice
    }

    pub fn resolved(&self) -> ColorScheme {
        *self.shared.resolved.read().unwrap()
    }

    /// Set the user's preference
    ///
    /// Concrete choices persist; `system` clears the stored override.
    /// Listeners fire only when the resolved scheme actually changes.
    pub fn set_choice(&mut self, choice: ThemeChoice) {
        self.choice = choice;

        let result = match choice.as_scheme() {
            Some(scheme) => self.store.save(scheme),
            None => self.store.clear(),
        };
        if let Err(err) = result {
            tracing::warn!("theme preference not persisted: {err}");
        }

        self.apply_resolution(choice.resolve(self.source.current()));
    }

    /// Flip between light and dark
    ///
    /// Toggling always lands on a concrete choice, never `system`.
    pub fn toggle(&mut self) {
        let next = self.resolved().toggle();
        self.set_choice(ThemeChoice::from(next));
    }

    /// The operating system's scheme changed
    ///
    /// Only matters while following the system; an explicit choice pins the
    /// resolution regardless of the signal.
    pub fn system_scheme_changed(&mut self, scheme: ColorScheme) {
        if self.choice != ThemeChoice::System {
            return;
        }
        self.apply_resolution(scheme);
    }

    /// Register a listener fired on every resolution change
    ///
    /// The returned guard removes the listener when dropped.
    pub fn subscribe(&self, listener: impl Fn(ColorScheme) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut next = self.shared.next_listener_id.lock().unwrap();
            *next += 1;
            *next
        };
        self.shared
            .listeners
            .lock()
            .unwrap()
            .push((id, Arc::new(listener)));

        let shared = Arc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = shared.upgrade() {
                shared.listeners.lock().unwrap().retain(|(lid, _)| *lid != id);
            }
        })
    }

    /// Tear down: detach every handle and listener
    ///
    /// Dropping the manager has the same effect.
    pub fn shutdown(self) {
        drop(self);
    }

    fn apply_resolution(&self, resolved: ColorScheme) {
        let changed = {
            let mut current = self.shared.resolved.write().unwrap();
            if *current == resolved {
                false
            } else {
                tracing::debug!(from = ?*current, to = ?resolved, "resolved theme changed");
                *current = resolved;
                true
            }
        };
        if changed {
            self.shared.notify(resolved);
        }
    }
}

impl Drop for ThemeManager {
    fn drop(&mut self) {
        self.shared.active.store(false, Ordering::SeqCst);
        self.shared.listeners.lock().unwrap().clear();
    }
}
