//! Visibility-gated count-up engine
//!
//! Drives a displayed number from zero to a target while the element is
//! visible. Values are floored per frame so a statistic reads as whole
//! counts mid-flight, but the terminal value is the exact target.

/// What happens to accumulated progress when the element leaves view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisibilityPolicy {
    /// Drop progress and show zero; the count replays on re-entry.
    ///
    /// This is the faithful behavior: progress is discarded rather than
    /// paused, which can surprise users expecting resume-on-return.
    #[default]
    Restart,
    /// Freeze progress while hidden and resume where it left off
    Pause,
}

/// A count-up animation toward a numeric target
#[derive(Clone, Debug)]
pub struct CountUp {
    target: f64,
    duration_s: f32,
    elapsed_s: f32,
    visible: bool,
    running: bool,
    policy: VisibilityPolicy,
}

impl CountUp {
    /// Counter for `target` over `duration_s` seconds (default 2s via
    /// [`CountUp::with_default_duration`])
    ///
    /// Invalid input degrades instead of failing the behavior: a non-finite
    /// target counts to zero, a non-positive duration completes immediately.
    pub fn new(target: f64, duration_s: f32) -> Self {
        let target = if target.is_finite() {
            target
        } else {
            tracing::debug!("non-finite count-up target, clamping to 0");
            0.0
        };
        Self {
            target,
            duration_s: if duration_s.is_finite() { duration_s } else { 0.0 },
            elapsed_s: 0.0,
            visible: false,
            running: false,
            policy: VisibilityPolicy::default(),
        }
    }

    /// Counter with the standard 2 second duration
    pub fn with_default_duration(target: f64) -> Self {
        Self::new(target, 2.0)
    }

    /// Choose the hide behavior (restart is the default)
    pub fn policy(mut self, policy: VisibilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Still accumulating progress
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Visibility gate, driven by the observer
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;

        if visible {
            self.running = true;
        } else {
            match self.policy {
                VisibilityPolicy::Restart => {
                    // Discard progress and cancel the run; no later tick may
                    // mutate the value until the element re-enters.
                    self.elapsed_s = 0.0;
                    self.running = false;
                }
                VisibilityPolicy::Pause => {
                    self.running = false;
                }
            }
        }
    }

    /// Advance by `dt` seconds; no-op while hidden or complete
    pub fn tick(&mut self, dt: f32) {
        if !self.running || !self.visible || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed_s += dt;
        if self.progress() >= 1.0 {
            self.elapsed_s = self.duration_s.max(0.0);
            self.running = false;
        }
    }

    fn progress(&self) -> f32 {
        if self.duration_s <= 0.0 {
            // Zero or negative duration completes immediately while visible
            return if self.visible { 1.0 } else { 0.0 };
        }
        (self.elapsed_s / self.duration_s).clamp(0.0, 1.0)
    }

    /// Current displayed value
    ///
    /// Floored each frame; exactly `target` once complete (fractional
    /// targets included, formatting is the caller's concern).
    pub fn value(&self) -> f64 {
        let progress = self.progress() as f64;
        if progress >= 1.0 {
            self.target
        } else {
            (self.target * progress).floor()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_exactly_at_duration() {
        let mut counter = CountUp::new(100.0, 1.0);
        counter.set_visible(true);
        counter.tick(1.0);

        assert_eq!(counter.value(), 100.0);
        assert!(!counter.is_running());
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let mut counter = CountUp::new(100.0, 1.0);
        counter.set_visible(true);

        let mut prev = counter.value();
        for _ in 0..100 {
            counter.tick(0.010);
            let value = counter.value();
            assert!(value >= prev, "count regressed: {prev} -> {value}");
            assert!((0.0..=100.0).contains(&value));
            prev = value;
        }
    }

    #[test]
    fn test_intermediate_values_are_floored() {
        let mut counter = CountUp::new(100.0, 1.0);
        counter.set_visible(true);
        counter.tick(0.25);

        assert_eq!(counter.value(), 25.0);
        assert_eq!(counter.value().fract(), 0.0);
    }

    #[test]
    fn test_negative_target_floors_downward() {
        let mut counter = CountUp::new(-10.0, 1.0);
        counter.set_visible(true);
        counter.tick(0.25);

        // floor(-2.5), not truncation toward zero
        assert_eq!(counter.value(), -3.0);

        counter.tick(0.75);
        assert_eq!(counter.value(), -10.0);
    }

    #[test]
    fn test_hide_resets_immediately() {
        let mut counter = CountUp::new(100.0, 1.0);
        counter.set_visible(true);
        counter.tick(0.5);
        assert!(counter.value() > 0.0);

        counter.set_visible(false);
        assert_eq!(counter.value(), 0.0);

        // No background mutation after reset
        counter.tick(0.016);
        counter.tick(0.016);
        assert_eq!(counter.value(), 0.0);
    }

    #[test]
    fn test_replay_after_reset() {
        let mut counter = CountUp::new(100.0, 1.0);
        counter.set_visible(true);
        counter.tick(0.5);
        counter.set_visible(false);

        counter.set_visible(true);
        counter.tick(1.0);
        assert_eq!(counter.value(), 100.0);
    }

    #[test]
    fn test_pause_policy_resumes() {
        let mut counter = CountUp::new(100.0, 1.0).policy(VisibilityPolicy::Pause);
        counter.set_visible(true);
        counter.tick(0.25);
        let frozen = counter.value();
        assert!(frozen > 0.0);

        counter.set_visible(false);
        counter.tick(0.500);
        assert_eq!(counter.value(), frozen);

        counter.set_visible(true);
        counter.tick(0.75);
        assert_eq!(counter.value(), 100.0);
    }

    #[test]
    fn test_fractional_target_terminal_value() {
        let mut counter = CountUp::new(98.6, 0.5);
        counter.set_visible(true);
        counter.tick(0.5);

        // Terminal value is the exact target, flooring only applies mid-flight
        assert_eq!(counter.value(), 98.6);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut counter = CountUp::new(42.0, 0.0);
        assert_eq!(counter.value(), 0.0);

        counter.set_visible(true);
        assert_eq!(counter.value(), 42.0);
    }

    #[test]
    fn test_non_finite_target_counts_to_zero() {
        let mut counter = CountUp::new(f64::NAN, 1.0);
        counter.set_visible(true);
        counter.tick(1.0);
        assert_eq!(counter.value(), 0.0);
    }
}
