//! Pointer input data
//!
//! Interaction engines consume plain samples; how they were produced
//! (mouse, touch, synthetic test input) is the platform layer's concern.

/// A single pointer position sample in the same coordinate space as the
/// region rect it is measured against
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Samples with non-finite coordinates are dropped by consumers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
