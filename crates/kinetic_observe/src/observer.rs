//! Viewport intersection tracking
//!
//! Watches are stored behind slotmap keys and recomputed whenever the
//! viewport or an element rect changes. Callbacks fire synchronously on
//! visibility transitions, within the caller's update cycle. Recompute and
//! dispatch are separate phases so the shared handle can release its lock
//! before any callback runs.

use kinetic_core::{Insets, Rect, Subscription};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Key identifying a tracked element
    pub struct WatchId;
}

/// Options for a single visibility watch
#[derive(Clone, Copy, Debug)]
pub struct ObserveOptions {
    /// Share of the element's area that must overlap the region, in `[0,1]`.
    /// Zero means any positive overlap counts.
    pub threshold: f32,
    /// Latch the first positive transition and detach the callback
    pub trigger_once: bool,
    /// Edge insets expanding the viewport into the observation region
    pub root_margin: Insets,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            trigger_once: false,
            root_margin: Insets::ZERO,
        }
    }
}

impl ObserveOptions {
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn trigger_once(mut self, once: bool) -> Self {
        self.trigger_once = once;
        self
    }

    pub fn root_margin(mut self, margin: Insets) -> Self {
        self.root_margin = margin;
        self
    }
}

/// Current visibility of a tracked element
#[derive(Clone, Copy, Debug)]
pub struct VisibilityState {
    pub is_visible: bool,
    pub threshold: f32,
    pub trigger_once: bool,
}

type WatchCallback = Box<dyn FnMut(bool) + Send>;

/// Transitions produced by one recompute pass, dispatched afterwards
type TransitionBatch = SmallVec<[(WatchId, bool); 4]>;

struct Watch {
    rect: Rect,
    options: ObserveOptions,
    is_visible: bool,
    /// `None` once a `trigger_once` watch has fired, or after degraded init
    callback: Option<WatchCallback>,
}

/// Tracks element visibility against a viewport region
///
/// A `None` viewport models a platform without intersection capability:
/// every element is reported visible immediately and no transitions ever
/// fire, so consumers render their settled state instead of blocking.
pub struct ViewportObserver {
    viewport: Option<Rect>,
    watches: SlotMap<WatchId, Watch>,
}

impl ViewportObserver {
    /// Observer with intersection capability
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport: Some(viewport),
            watches: SlotMap::with_key(),
        }
    }

    /// Degraded observer: no intersection capability available
    pub fn degraded() -> Self {
        tracing::debug!("viewport intersection unavailable, reporting all elements visible");
        Self {
            viewport: None,
            watches: SlotMap::with_key(),
        }
    }

    /// Start tracking an element
    ///
    /// The callback fires synchronously on every visibility transition,
    /// including one immediate call if the element is already visible.
    pub fn observe(
        &mut self,
        rect: Rect,
        options: ObserveOptions,
        callback: impl FnMut(bool) + Send + 'static,
    ) -> WatchId {
        let mut callback: WatchCallback = Box::new(callback);

        let Some(viewport) = self.viewport else {
            // Degraded: visible immediately, nothing left to track
            callback(true);
            return self.watches.insert(Watch {
                rect,
                options,
                is_visible: true,
                callback: None,
            });
        };

        let is_visible = intersects(viewport, rect, &options);
        if is_visible {
            callback(true);
        }

        let keep_callback = !(options.trigger_once && is_visible);
        self.watches.insert(Watch {
            rect,
            options,
            is_visible,
            callback: keep_callback.then_some(callback),
        })
    }

    /// Stop tracking an element
    pub fn unobserve(&mut self, id: WatchId) {
        self.watches.remove(id);
    }

    /// Current state for a tracked element
    pub fn state(&self, id: WatchId) -> Option<VisibilityState> {
        self.watches.get(id).map(|w| VisibilityState {
            is_visible: w.is_visible,
            threshold: w.options.threshold,
            trigger_once: w.options.trigger_once,
        })
    }

    /// Number of tracked elements
    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Move the viewport (scroll or resize) and recompute every watch
    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.viewport.is_none() {
            return;
        }
        let fired = self.apply_viewport(viewport);
        self.dispatch(fired);
    }

    /// Update a tracked element's rect (layout change) and recompute it
    pub fn update_rect(&mut self, id: WatchId, rect: Rect) {
        let fired = self.apply_rect(id, rect);
        self.dispatch(fired);
    }

    /// Recompute every watch against a new viewport; returns the transitions
    /// this pass produced, without invoking callbacks
    fn apply_viewport(&mut self, viewport: Rect) -> TransitionBatch {
        self.viewport = Some(viewport);

        let mut fired = TransitionBatch::new();
        for (id, watch) in self.watches.iter_mut() {
            if let Some(visible) = Self::transition(viewport, watch) {
                fired.push((id, visible));
            }
        }
        tracing::trace!(
            watches = self.watches.len(),
            transitions = fired.len(),
            "viewport recompute"
        );
        fired
    }

    fn apply_rect(&mut self, id: WatchId, rect: Rect) -> TransitionBatch {
        let mut fired = TransitionBatch::new();
        let Some(viewport) = self.viewport else {
            return fired;
        };
        if let Some(watch) = self.watches.get_mut(id) {
            watch.rect = rect;
            if let Some(visible) = Self::transition(viewport, watch) {
                fired.push((id, visible));
            }
        }
        fired
    }

    /// Update one watch's visibility; returns the new value on a transition
    fn transition(viewport: Rect, watch: &mut Watch) -> Option<bool> {
        // Latched trigger_once watches never revert
        if watch.options.trigger_once && watch.is_visible {
            return None;
        }

        let now_visible = intersects(viewport, watch.rect, &watch.options);
        if now_visible == watch.is_visible {
            return None;
        }
        watch.is_visible = now_visible;
        Some(now_visible)
    }

    fn dispatch(&mut self, fired: TransitionBatch) {
        for (id, visible) in fired {
            if let Some(watch) = self.watches.get_mut(id) {
                if let Some(callback) = watch.callback.as_mut() {
                    callback(visible);
                }
                if watch.options.trigger_once && visible {
                    watch.callback = None;
                }
            }
        }
    }
}

/// Visibility test: overlapped share of the element's area vs threshold
fn intersects(viewport: Rect, rect: Rect, options: &ObserveOptions) -> bool {
    let region = viewport.expand(options.root_margin);

    // Degenerate element rects cannot be measured; report them visible so
    // they never block rendering.
    if rect.is_degenerate() {
        return true;
    }

    let Some(overlap) = region.intersection(&rect) else {
        return false;
    };

    if options.threshold <= 0.0 {
        return true;
    }
    overlap.area() / rect.area() >= options.threshold
}

/// A [`ViewportObserver`] behind a shared handle, for consumers that need
/// RAII deregistration
///
/// [`observe`](Self::observe) returns a [`Subscription`] that removes the
/// watch when dropped, so a behavior torn down mid-scroll cannot leak its
/// callback. Callbacks are invoked with the inner lock released, so they may
/// read back through any clone of the handle or drop their own guard.
#[derive(Clone)]
pub struct SharedObserver {
    inner: Arc<Mutex<ViewportObserver>>,
}

impl SharedObserver {
    pub fn new(observer: ViewportObserver) -> Self {
        Self {
            inner: Arc::new(Mutex::new(observer)),
        }
    }

    pub fn observe(
        &self,
        rect: Rect,
        options: ObserveOptions,
        callback: impl FnMut(bool) + Send + 'static,
    ) -> (WatchId, Subscription) {
        let callback: WatchCallback = Box::new(callback);
        let (id, initially_visible) = {
            let mut observer = self.inner.lock().unwrap();
            let is_visible = match observer.viewport {
                None => true,
                Some(viewport) => intersects(viewport, rect, &options),
            };
            let id = observer.watches.insert(Watch {
                rect,
                options,
                is_visible,
                callback: Some(callback),
            });
            (id, is_visible)
        };

        if initially_visible {
            let mut fired = TransitionBatch::new();
            fired.push((id, true));
            self.dispatch(fired);
        }

        let inner = Arc::downgrade(&self.inner);
        let guard = Subscription::new(move || {
            if let Some(observer) = inner.upgrade() {
                observer.lock().unwrap().unobserve(id);
            }
        });
        (id, guard)
    }

    pub fn set_viewport(&self, viewport: Rect) {
        let fired = {
            let mut observer = self.inner.lock().unwrap();
            if observer.viewport.is_none() {
                return;
            }
            observer.apply_viewport(viewport)
        };
        self.dispatch(fired);
    }

    pub fn update_rect(&self, id: WatchId, rect: Rect) {
        let fired = self.inner.lock().unwrap().apply_rect(id, rect);
        self.dispatch(fired);
    }

    pub fn state(&self, id: WatchId) -> Option<VisibilityState> {
        self.inner.lock().unwrap().state(id)
    }

    pub fn watch_count(&self) -> usize {
        self.inner.lock().unwrap().watch_count()
    }

    /// Invoke callbacks for a batch of transitions with the lock released
    ///
    /// Each callback is taken out of its watch, run unlocked, then restored
    /// unless the watch latched, was removed mid-call, or the observer is
    /// degraded (degraded watches never fire again).
    fn dispatch(&self, fired: TransitionBatch) {
        for (id, visible) in fired {
            let taken = {
                let mut observer = self.inner.lock().unwrap();
                observer.watches.get_mut(id).and_then(|w| w.callback.take())
            };
            let Some(mut callback) = taken else {
                continue;
            };
            callback(visible);

            let mut observer = self.inner.lock().unwrap();
            let degraded = observer.viewport.is_none();
            if let Some(watch) = observer.watches.get_mut(id) {
                let latched = watch.options.trigger_once && visible;
                if !degraded && !latched {
                    watch.callback = Some(callback);
                }
            }
        }
    }
}
