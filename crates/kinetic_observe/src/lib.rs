//! Kinetic Scroll-Visibility Observer
//!
//! Detects when tracked elements enter a viewport-relative region. This is
//! the foundation every reveal and count-up behavior builds on.
//!
//! # Features
//!
//! - **Threshold-based visibility**: an element counts as visible once the
//!   overlapped share of its area reaches the configured threshold
//! - **Once-semantics**: `trigger_once` latches the first positive transition
//!   and detaches the callback
//! - **Root margin**: the observation region is the viewport expanded by
//!   edge insets, so reveals can start before an element is on screen
//! - **Graceful degradation**: an observer built without intersection
//!   capability reports every element visible immediately
//!
//! # Example
//!
//! ```rust
//! use kinetic_core::Rect;
//! use kinetic_observe::{ObserveOptions, ViewportObserver};
//!
//! let mut observer = ViewportObserver::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let id = observer.observe(
//!     Rect::new(0.0, 900.0, 200.0, 100.0),
//!     ObserveOptions::default(),
//!     |visible| println!("visible: {visible}"),
//! );
//!
//! // Scrolling moves the viewport; transitions fire synchronously.
//! observer.set_viewport(Rect::new(0.0, 500.0, 800.0, 600.0));
//! assert!(observer.state(id).unwrap().is_visible);
//! ```

pub mod observer;

pub use observer::{ObserveOptions, SharedObserver, ViewportObserver, VisibilityState, WatchId};
