//! Rotation amounts with radian, degree and percent-of-turn views.
//!
//! Model
//! - One stored scalar (radians). Degrees and percent are computed on read,
//!   so the three views can never disagree.
//! - 100 percent is one full turn (2π rad, 360°).
//!
//! Equality and ordering
//! - Both compare the raw radian value. Nothing is folded into `[0, 2π)`:
//!   30° and 390° are different angles, and -50° < 30° < 330°.
//! - Treat `Angle` as a signed rotation amount, not as a direction. Callers
//!   that want directional equivalence must normalize themselves.
//!
//! Non-finite inputs are accepted and propagate through every accessor.

use std::cmp::Ordering;
use std::f64::consts::TAU;
use std::fmt;

/// Immutable rotation quantity, stored in radians.
///
/// `PartialEq`/`PartialOrd` act on the unnormalized radian value.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero rotation.
    pub const ZERO: Angle = Angle { radians: 0.0 };
    /// One full turn: 2π rad, 360°, 100%.
    pub const FULL_TURN: Angle = Angle { radians: TAU };

    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// `radians = degrees * π/180`.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// `radians = percent/100 * 2π`.
    #[inline]
    pub fn from_percent(percent: f64) -> Self {
        Self {
            radians: percent / 100.0 * TAU,
        }
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    #[inline]
    pub fn percent(&self) -> f64 {
        self.radians / TAU * 100.0
    }

    #[inline]
    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    #[inline]
    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    /// Not guarded at the poles; returns whatever `f64::tan` yields there.
    #[inline]
    pub fn tan(&self) -> f64 {
        self.radians.tan()
    }

    /// `(sin, cos)` in one evaluation.
    #[inline]
    pub fn sin_cos(&self) -> (f64, f64) {
        self.radians.sin_cos()
    }

    /// Total order over the raw radian value, NaN included (`f64::total_cmp`).
    #[inline]
    pub fn total_cmp(&self, other: &Angle) -> Ordering {
        self.radians.total_cmp(&other.radians)
    }

    /// `|self - other| <= eps` in radians, still unnormalized.
    #[inline]
    pub fn approx_eq(&self, other: &Angle, eps: f64) -> bool {
        (self.radians - other.radians).abs() <= eps
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}°", p, self.degrees()),
            None => write!(f, "{}°", self.degrees()),
        }
    }
}
