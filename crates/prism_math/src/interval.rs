use crate::T_MIN;

/// A range of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Every hit in front of a ray origin, from `T_MIN` to infinity.
    pub fn forward() -> Self {
        Self::new(T_MIN, f32::INFINITY)
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Returns true if x is within the half-open interval [min, max).
    ///
    /// Closest-hit searches shrink `max` to the best `t` so far, so a later
    /// candidate at exactly the same distance is rejected and the first
    /// one found wins.
    pub fn admits(&self, x: f32) -> bool {
        self.min <= x && x < self.max
    }

    /// Same interval with a new upper bound.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// The unit interval, the span of a shadow ray.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}
