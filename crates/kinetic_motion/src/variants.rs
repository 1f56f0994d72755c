//! Animation variant catalog
//!
//! Named transition presets consumed by any renderer. Variants are immutable
//! value objects and the factories are pure: equal inputs always produce
//! structurally equal outputs, which keeps them unit-testable with no
//! rendering dependency.

use crate::easing::Easing;
use kinetic_core::lerp;

/// A sparse bundle of style values; unset fields are left untouched by the
/// renderer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VariantState {
    /// Opacity in `[0,1]`
    pub opacity: Option<f32>,
    /// X translation in pixels
    pub x: Option<f32>,
    /// Y translation in pixels
    pub y: Option<f32>,
    /// Uniform scale factor
    pub scale: Option<f32>,
}

impl VariantState {
    pub fn opacity(value: f32) -> Self {
        Self {
            opacity: Some(value),
            ..Default::default()
        }
    }

    pub fn with_opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn with_x(mut self, px: f32) -> Self {
        self.x = Some(px);
        self
    }

    pub fn with_y(mut self, px: f32) -> Self {
        self.y = Some(px);
        self
    }

    pub fn with_scale(mut self, factor: f32) -> Self {
        self.scale = Some(factor);
        self
    }

    /// Interpolate toward another state; fields set on only one side adopt
    /// the set value
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: lerp_opt(self.opacity, other.opacity, t),
            x: lerp_opt(self.x, other.x, t),
            y: lerp_opt(self.y, other.y, t),
            scale: lerp_opt(self.scale, other.scale, t),
        }
    }
}

fn lerp_opt(from: Option<f32>, to: Option<f32>, t: f32) -> Option<f32> {
    match (from, to) {
        (Some(a), Some(b)) => Some(lerp(a, b, t)),
        (a, b) => b.or(a),
    }
}

/// Timing for the animate phase of a variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Duration in seconds
    pub duration: f32,
    /// Delay in seconds before the animation starts
    pub delay: f32,
    pub ease: Easing,
    /// Incremental delay across child animations, in seconds
    pub stagger_children: Option<f32>,
    /// Delay before the first child starts, in seconds
    pub delay_children: Option<f32>,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: 0.3,
            delay: 0.0,
            ease: Easing::EaseOut,
            stagger_children: None,
            delay_children: None,
        }
    }
}

/// A named transition preset: where an element starts, where it animates to,
/// optionally where it exits to, and how the animate phase is timed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationVariant {
    pub initial: VariantState,
    pub animate: VariantState,
    pub exit: Option<VariantState>,
    pub transition: Transition,
}

/// Fixed page-transition preset: rise in, lift out
pub fn page_transition() -> AnimationVariant {
    AnimationVariant {
        initial: VariantState::opacity(0.0).with_y(20.0),
        animate: VariantState::opacity(1.0).with_y(0.0),
        exit: Some(VariantState::opacity(0.0).with_y(-20.0)),
        transition: Transition {
            duration: 0.4,
            ease: Easing::EaseInOut,
            ..Default::default()
        },
    }
}

/// Container variant whose animate transition carries the stagger fields
/// verbatim; children supply their own states
pub fn stagger_container(stagger_children: f32, delay_children: f32) -> AnimationVariant {
    AnimationVariant {
        initial: VariantState::default(),
        animate: VariantState::default(),
        exit: None,
        transition: Transition {
            stagger_children: Some(stagger_children),
            delay_children: Some(delay_children),
            ..Default::default()
        },
    }
}

/// Fade in while rising from 60px below
pub fn fade_in_up(duration: f32) -> AnimationVariant {
    AnimationVariant {
        initial: VariantState::opacity(0.0).with_y(60.0),
        animate: VariantState::opacity(1.0).with_y(0.0),
        exit: None,
        transition: Transition {
            duration,
            ..Default::default()
        },
    }
}

/// Fade in while scaling up from 80%
pub fn scale_in(duration: f32, ease: Easing) -> AnimationVariant {
    AnimationVariant {
        initial: VariantState::opacity(0.0).with_scale(0.8),
        animate: VariantState::opacity(1.0).with_scale(1.0),
        exit: None,
        transition: Transition {
            duration,
            ease,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_are_pure() {
        assert_eq!(page_transition(), page_transition());
        assert_eq!(fade_in_up(0.8), fade_in_up(0.8));
        assert_eq!(
            scale_in(0.3, Easing::EaseOut),
            scale_in(0.3, Easing::EaseOut)
        );
        assert_eq!(stagger_container(0.1, 0.2), stagger_container(0.1, 0.2));
    }

    #[test]
    fn test_scale_in_transition_fields() {
        let variant = scale_in(0.3, Easing::EaseOut);
        assert_eq!(variant.transition.duration, 0.3);
        assert_eq!(variant.transition.ease, Easing::EaseOut);
        assert_eq!(variant.initial.opacity, Some(0.0));
        assert_eq!(variant.initial.scale, Some(0.8));
        assert_eq!(variant.animate.scale, Some(1.0));
    }

    #[test]
    fn test_stagger_passthrough_is_verbatim() {
        for (stagger, delay) in [(0.1, 0.2), (0.0, 0.0), (1.5, 0.75)] {
            let variant = stagger_container(stagger, delay);
            assert_eq!(variant.transition.stagger_children, Some(stagger));
            assert_eq!(variant.transition.delay_children, Some(delay));
        }
    }

    #[test]
    fn test_page_transition_states() {
        let variant = page_transition();
        assert_eq!(variant.initial, VariantState::opacity(0.0).with_y(20.0));
        assert_eq!(variant.animate, VariantState::opacity(1.0).with_y(0.0));
        assert_eq!(
            variant.exit,
            Some(VariantState::opacity(0.0).with_y(-20.0))
        );
    }

    #[test]
    fn test_fade_in_up_duration_passthrough() {
        assert_eq!(fade_in_up(0.65).transition.duration, 0.65);
        assert_eq!(fade_in_up(0.65).initial.y, Some(60.0));
    }

    #[test]
    fn test_state_lerp_midpoint() {
        let variant = fade_in_up(0.5);
        let mid = variant.initial.lerp(&variant.animate, 0.5);
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.y, Some(30.0));
    }

    #[test]
    fn test_state_lerp_one_sided_fields() {
        let from = VariantState::opacity(0.0);
        let to = VariantState::opacity(1.0).with_scale(1.0);
        let mid = from.lerp(&to, 0.25);
        assert_eq!(mid.opacity, Some(0.25));
        // Scale only exists on the target side and is adopted as-is
        assert_eq!(mid.scale, Some(1.0));
    }
}
