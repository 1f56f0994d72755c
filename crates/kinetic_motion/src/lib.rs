//! Kinetic Motion
//!
//! The animation half of the toolkit: timing curves, spring physics, and the
//! engines that turn visibility and pointer input into style data.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible timing curves including cubic bezier
//! - **Spring physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Variant catalog**: immutable transition presets consumed by renderers
//! - **Count-up**: visibility-gated numeric counters
//! - **Parallax / magnetic**: scroll- and pointer-driven spring-damped offsets
//! - **Reveal behaviors**: visibility-to-variant bundles with stagger support
//!
//! All engines advance via explicit `tick`/`step` calls; nothing here owns a
//! thread or a timer.

pub mod counter;
pub mod easing;
pub mod pointer;
pub mod reveal;
pub mod scheduler;
pub mod spring;
pub mod variants;

pub use counter::{CountUp, VisibilityPolicy};
pub use easing::Easing;
pub use pointer::{Magnetic, Parallax};
pub use reveal::{Reveal, StaggerConfig, StaggerDirection};
pub use scheduler::{AnimationScheduler, CounterId, SpringId};
pub use spring::{Spring, SpringConfig};
pub use variants::{fade_in_up, page_transition, scale_in, stagger_container};
pub use variants::{AnimationVariant, Transition, VariantState};
