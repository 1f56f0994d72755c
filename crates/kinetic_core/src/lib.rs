//! Kinetic Core
//!
//! Foundational primitives shared by the kinetic toolkit crates:
//!
//! - **Geometry**: plain-value points, rectangles, and edge insets
//! - **Pointer samples**: the raw input data interaction engines consume
//! - **Subscriptions**: RAII cancellation handles for every registered callback
//!
//! # Example
//!
//! ```rust
//! use kinetic_core::{Point, Rect};
//!
//! let region = Rect::new(0.0, 0.0, 100.0, 50.0);
//! assert_eq!(region.center(), Point::new(50.0, 25.0));
//! ```

pub mod geometry;
pub mod pointer;
pub mod subscription;

pub use geometry::{lerp, Insets, Point, Rect};
pub use pointer::PointerSample;
pub use subscription::Subscription;
