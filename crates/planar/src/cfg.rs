//! Comparison tolerances.
//!
//! Policy
//! - `==` on `Angle` and `Vec2d` is exact. Approximate comparison is always an
//!   explicit call with an explicit bound, either through `Tolerance` or the
//!   `approx_eq` helpers on the value types.

use crate::{Angle, Vec2d};

/// Default accuracy bound for approximate comparisons.
pub const ACCURACY: f64 = 1e-4;

/// Absolute-difference comparison with a fixed bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: ACCURACY }
    }
}

impl Tolerance {
    #[inline]
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }
    #[inline]
    pub fn scalars(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }
    /// Compares radians; 30° and 390° are still far apart.
    #[inline]
    pub fn angles(&self, a: Angle, b: Angle) -> bool {
        a.approx_eq(&b, self.eps)
    }
    /// Componentwise.
    #[inline]
    pub fn vectors(&self, a: Vec2d, b: Vec2d) -> bool {
        a.approx_eq(&b, self.eps)
    }
}
