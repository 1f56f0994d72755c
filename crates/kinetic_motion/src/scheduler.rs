//! Animation scheduler
//!
//! Owns active springs and counters behind slotmap keys and advances them
//! each frame from a wall clock. Hosts that drive time themselves (tests,
//! headless rendering) can call [`AnimationScheduler::tick_by`] instead.

use crate::counter::CountUp;
use crate::spring::Spring;
use slotmap::{new_key_type, SlotMap};
use std::time::Instant;

new_key_type! {
    pub struct SpringId;
    pub struct CounterId;
}

/// Ticks all registered animations
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, Spring>,
    counters: SlotMap<CounterId, CountUp>,
    last_frame: Instant,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
            counters: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    pub fn add_spring(&mut self, spring: Spring) -> SpringId {
        self.springs.insert(spring)
    }

    pub fn get_spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    pub fn get_spring_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
        self.springs.get_mut(id)
    }

    pub fn remove_spring(&mut self, id: SpringId) -> Option<Spring> {
        self.springs.remove(id)
    }

    pub fn add_counter(&mut self, counter: CountUp) -> CounterId {
        self.counters.insert(counter)
    }

    pub fn get_counter(&self, id: CounterId) -> Option<&CountUp> {
        self.counters.get(id)
    }

    pub fn get_counter_mut(&mut self, id: CounterId) -> Option<&mut CountUp> {
        self.counters.get_mut(id)
    }

    pub fn remove_counter(&mut self, id: CounterId) -> Option<CountUp> {
        self.counters.remove(id)
    }

    /// Tick all animations from the wall clock
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(dt);
    }

    /// Tick all animations by an explicit delta, in seconds
    pub fn tick_by(&mut self, dt: f32) {
        self.last_frame = Instant::now();
        self.advance(dt);
    }

    fn advance(&mut self, dt: f32) {
        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
        }
        for (_, counter) in self.counters.iter_mut() {
            counter.tick(dt);
        }
    }

    /// Whether any animation still needs frames
    pub fn has_active_animations(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
            || self.counters.iter().any(|(_, c)| c.is_running())
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    pub fn counter_count(&self) -> usize {
        self.counters.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
