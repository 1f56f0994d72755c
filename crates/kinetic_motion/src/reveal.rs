//! Reveal behaviors
//!
//! Thin composition layer: visibility from the observer selects between a
//! variant's initial and animate states, and stagger timing spreads a group
//! of child reveals out over time. The output is plain style data; applying
//! it is the rendering layer's job.

use crate::variants::{AnimationVariant, Transition, VariantState};
use kinetic_observe::ObserveOptions;

/// Direction a stagger sweeps through its children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaggerDirection {
    /// First to last
    #[default]
    Forward,
    /// Last to first
    Reverse,
    /// Center outward
    FromCenter,
}

/// Per-child delay computation for grouped reveals
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerConfig {
    /// Delay between consecutive children, in seconds
    pub stagger_children: f32,
    /// Delay before the first child starts, in seconds
    pub delay_children: f32,
    pub direction: StaggerDirection,
    /// Cap the effective index so long lists stop accumulating delay
    pub limit: Option<usize>,
}

impl StaggerConfig {
    pub fn new(stagger_children: f32, delay_children: f32) -> Self {
        Self {
            stagger_children: stagger_children.max(0.0),
            delay_children: delay_children.max(0.0),
            direction: StaggerDirection::Forward,
            limit: None,
        }
    }

    /// Read the stagger fields off a container variant
    ///
    /// Returns `None` when the variant carries no stagger timing.
    pub fn from_variant(variant: &AnimationVariant) -> Option<Self> {
        let stagger = variant.transition.stagger_children?;
        let delay = variant.transition.delay_children.unwrap_or(0.0);
        Some(Self::new(stagger, delay))
    }

    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Start delay in seconds for the child at `index` of `total`
    pub fn delay_for_index(&self, index: usize, total: usize) -> f32 {
        let effective = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => {
                let center = total / 2;
                index.abs_diff(center)
            }
        };
        let capped = match self.limit {
            Some(limit) => effective.min(limit),
            None => effective,
        };
        self.delay_children + self.stagger_children * capped as f32
    }
}

/// A scroll-reveal behavior: one variant gated by one visibility watch
///
/// The host registers [`observe_options`](Self::observe_options) with the
/// observer, forwards transitions into [`set_visible`](Self::set_visible),
/// and hands [`current_state`](Self::current_state) to the renderer.
#[derive(Clone, Debug)]
pub struct Reveal {
    variant: AnimationVariant,
    options: ObserveOptions,
    visible: bool,
}

impl Reveal {
    /// Reveal-once with a 10% visibility threshold, the common default for
    /// below-the-fold content
    pub fn new(variant: AnimationVariant) -> Self {
        Self {
            variant,
            options: ObserveOptions::default().threshold(0.1).trigger_once(true),
            visible: false,
        }
    }

    pub fn observe_options(&self) -> ObserveOptions {
        self.options
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.options = self.options.threshold(threshold);
        self
    }

    pub fn trigger_once(mut self, once: bool) -> Self {
        self.options = self.options.trigger_once(once);
        self
    }

    /// Extra start delay layered onto the variant, in seconds; used by
    /// staggered groups
    pub fn delay(mut self, delay: f32) -> Self {
        self.variant.transition.delay = delay.max(0.0);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Visibility transition from the observer
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The style state the renderer should currently be at or animating
    /// toward
    pub fn current_state(&self) -> VariantState {
        if self.visible {
            self.variant.animate
        } else {
            self.variant.initial
        }
    }

    /// Timing for the animate phase
    pub fn transition(&self) -> Transition {
        self.variant.transition
    }

    /// The full variant, for renderers that also want the exit state
    pub fn variant(&self) -> &AnimationVariant {
        &self.variant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{fade_in_up, stagger_container};

    #[test]
    fn test_reveal_selects_state_by_visibility() {
        let mut reveal = Reveal::new(fade_in_up(0.6));
        assert_eq!(reveal.current_state(), fade_in_up(0.6).initial);

        reveal.set_visible(true);
        assert_eq!(reveal.current_state(), fade_in_up(0.6).animate);
    }

    #[test]
    fn test_reveal_defaults_to_trigger_once() {
        let reveal = Reveal::new(fade_in_up(0.6));
        assert!(reveal.observe_options().trigger_once);
        assert!((reveal.observe_options().threshold - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_stagger_forward_delays() {
        let config = StaggerConfig::new(0.05, 0.0);
        assert_eq!(config.delay_for_index(0, 5), 0.0);
        assert_eq!(config.delay_for_index(1, 5), 0.05);
        assert_eq!(config.delay_for_index(4, 5), 0.2);
    }

    #[test]
    fn test_stagger_base_delay_applies_to_all() {
        let config = StaggerConfig::new(0.1, 0.2);
        assert!((config.delay_for_index(0, 3) - 0.2).abs() < 1e-6);
        assert!((config.delay_for_index(2, 3) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_stagger_reverse() {
        let config = StaggerConfig::new(0.05, 0.0).reverse();
        assert_eq!(config.delay_for_index(0, 5), 0.2);
        assert_eq!(config.delay_for_index(4, 5), 0.0);
    }

    #[test]
    fn test_stagger_from_center() {
        let config = StaggerConfig::new(0.05, 0.0).from_center();
        // For 5 items, distances from center index 2 are [2, 1, 0, 1, 2]
        assert_eq!(config.delay_for_index(0, 5), 0.1);
        assert_eq!(config.delay_for_index(2, 5), 0.0);
        assert_eq!(config.delay_for_index(4, 5), 0.1);
    }

    #[test]
    fn test_stagger_limit_caps_delay() {
        let config = StaggerConfig::new(0.05, 0.0).limit(3);
        assert_eq!(config.delay_for_index(3, 10), config.delay_for_index(9, 10));
    }

    #[test]
    fn test_stagger_from_container_variant() {
        let container = stagger_container(0.1, 0.2);
        let config = StaggerConfig::from_variant(&container).unwrap();
        assert_eq!(config.stagger_children, 0.1);
        assert_eq!(config.delay_children, 0.2);

        assert!(StaggerConfig::from_variant(&fade_in_up(0.5)).is_none());
    }
}
