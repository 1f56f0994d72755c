//! Spring physics
//!
//! Damped harmonic oscillator integrated with RK4. Springs are the smoothing
//! layer for every continuous input in the toolkit: parallax offsets,
//! magnetic pointer return, and any value a renderer wants to trail a target
//! without jitter.
//!
//! Retargeting a live spring keeps its current velocity, so interrupted
//! motion blends instead of snapping.

/// Settled when both position error and velocity drop below these
const POSITION_EPSILON: f32 = 0.001;
const VELOCITY_EPSILON: f32 = 0.001;

/// Physical parameters of a spring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Stiffness k: pull toward the target
    pub stiffness: f32,
    /// Damping c: resistance proportional to velocity
    pub damping: f32,
    /// Mass m: inertia
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness: stiffness.max(f32::EPSILON),
            damping: damping.max(0.0),
            mass: mass.max(f32::EPSILON),
        }
    }

    /// Soft, slow approach
    pub fn gentle() -> Self {
        Self::new(120.0, 20.0, 1.0)
    }

    /// Fast approach with minimal overshoot
    pub fn stiff() -> Self {
        Self::new(210.0, 24.0, 1.0)
    }

    /// Quick and tight, for interaction feedback
    pub fn snappy() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Bouncy, visibly underdamped
    pub fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    /// Critically damped spring tuned to settle within 1% of the target in
    /// roughly `duration_s` seconds.
    ///
    /// For ζ = 1 the settle condition e^(-ω₀T)(1 + ω₀T) = 0.01 gives
    /// ω₀ ≈ 6.6 / T, then k = ω₀²·m and c = 2·ω₀·m.
    pub fn critically_damped(duration_s: f32) -> Self {
        let duration = duration_s.max(0.01);
        let omega_0 = 6.6 / duration;
        Self::new(omega_0 * omega_0, 2.0 * omega_0, 1.0)
    }

    /// Damping ratio ζ: < 1 underdamped, 1 critical, > 1 overdamped
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::gentle()
    }
}

/// A single animated scalar tracking a target value
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// A spring at rest on `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Retarget, keeping current position and velocity
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jump to a value with no motion
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Replace the physical parameters, preserving motion state
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// At rest on the target
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < POSITION_EPSILON
            && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Advance by `dt` seconds
    ///
    /// Large deltas (a hitched frame) are split into sub-steps so the
    /// integration stays stable under stiff configurations.
    pub fn step(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 || self.is_settled() {
            return;
        }

        const MAX_STEP: f32 = 1.0 / 60.0;
        let mut remaining = dt.min(0.25);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            self.rk4(h);
            remaining -= h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// Acceleration at a given state: a = (-k·(x - target) - c·v) / m
    #[inline]
    fn accel(&self, x: f32, v: f32) -> f32 {
        (-self.config.stiffness * (x - self.target) - self.config.damping * v) / self.config.mass
    }

    fn rk4(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.accel(x, v);

        let k2x = v + 0.5 * h * k1v;
        let k2v = self.accel(x + 0.5 * h * k1x, v + 0.5 * h * k1v);

        let k3x = v + 0.5 * h * k2v;
        let k3v = self.accel(x + 0.5 * h * k2x, v + 0.5 * h * k2v);

        let k4x = v + h * k3v;
        let k4v = self.accel(x + h * k3x, v + h * k3v);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}
