//! RAII cancellation handles
//!
//! Every callback the toolkit registers (visibility watches, theme listeners,
//! scheduled animations) hands back a [`Subscription`]. Dropping the handle
//! deregisters the callback; a registration that outlives its owner is a
//! defect, and the handle makes the cleanup path impossible to forget.

/// An owned cancellation guard for a registered callback
///
/// The wrapped closure runs exactly once, either on [`cancel`](Self::cancel)
/// or on drop. [`detach`](Self::detach) releases the guard without running
/// it, for registrations that are intentionally process-lived.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap a deregistration closure
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to cancel
    ///
    /// Used by degraded paths that never registered anything, so callers
    /// hold a uniform handle type either way.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Cancel now instead of at drop time
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Keep the registration alive for the rest of the process
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_drop_runs_cancel_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let sub = Subscription::new(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        drop(sub);

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_explicit_cancel_consumes_handle() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let sub = Subscription::new(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        sub.cancel();

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_detach_skips_cancel() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let sub = Subscription::new(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        sub.detach();

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
