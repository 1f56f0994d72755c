//! Parallax and magnetic pointer engines
//!
//! Both map a continuous input to a spring-damped offset. The springs do the
//! smoothing, so raw scroll or pointer jitter never reaches the renderer,
//! and pointer-leave returns are animated rather than instant snaps.

use crate::spring::{Spring, SpringConfig};
use kinetic_core::{Point, PointerSample, Rect};

/// Scroll-progress driven offset
///
/// Progress in `[0,1]` maps linearly to `[-distance, +distance]` pixels,
/// then trails the target through a spring.
#[derive(Clone, Debug)]
pub struct Parallax {
    distance: f32,
    offset: Spring,
}

impl Parallax {
    /// Default smoothing tuned for scroll input
    pub fn new(distance: f32) -> Self {
        Self::with_config(distance, SpringConfig::gentle())
    }

    /// Override the smoothing constants
    pub fn with_config(distance: f32, config: SpringConfig) -> Self {
        let distance = if distance.is_finite() { distance } else { 0.0 };
        Self {
            distance,
            offset: Spring::new(config, -distance),
        }
    }

    /// Feed the current scroll progress; values outside `[0,1]` are clamped
    pub fn set_progress(&mut self, progress: f32) {
        if !progress.is_finite() {
            return;
        }
        let t = progress.clamp(0.0, 1.0);
        self.offset.set_target((t * 2.0 - 1.0) * self.distance);
    }

    /// Advance the smoothing by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.offset.step(dt);
    }

    /// Current smoothed offset in pixels
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    /// The raw (unsmoothed) target offset
    pub fn target(&self) -> f32 {
        self.offset.target()
    }

    pub fn is_settled(&self) -> bool {
        self.offset.is_settled()
    }
}

/// Pointer-follow offset for a single interactive element
///
/// While the pointer hovers the bound region the offset tracks
/// `(pointer - center) * strength`; on leave it springs back to `{0,0}`.
/// The offset is exclusively owned by the element it is bound to.
#[derive(Clone, Debug)]
pub struct Magnetic {
    strength: f32,
    x: Spring,
    y: Spring,
}

impl Magnetic {
    /// `strength` is a damping factor in `(0,1]`; out-of-range input is
    /// clamped rather than rejected
    pub fn new(strength: f32) -> Self {
        Self::with_config(strength, SpringConfig::snappy())
    }

    /// Override the return-spring constants
    pub fn with_config(strength: f32, config: SpringConfig) -> Self {
        let strength = if strength.is_finite() {
            strength.clamp(f32::EPSILON, 1.0)
        } else {
            1.0
        };
        Self {
            strength,
            x: Spring::new(config, 0.0),
            y: Spring::new(config, 0.0),
        }
    }

    /// Pointer moved over the bound region
    ///
    /// Safe for any input: a degenerate rect or non-finite sample degrades
    /// the target to `{0,0}` instead of panicking.
    pub fn pointer_move(&mut self, region: Rect, sample: PointerSample) {
        if region.is_degenerate() || !sample.is_finite() {
            tracing::trace!(?region, "degenerate magnetic geometry, holding origin");
            self.x.set_target(0.0);
            self.y.set_target(0.0);
            return;
        }

        let center = region.center();
        self.x.set_target((sample.x - center.x) * self.strength);
        self.y.set_target((sample.y - center.y) * self.strength);
    }

    /// Pointer left the region: spring back to the origin
    pub fn pointer_leave(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// Advance the springs by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
    }

    /// Current smoothed offset
    pub fn offset(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    /// The raw target the springs are trailing
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}
