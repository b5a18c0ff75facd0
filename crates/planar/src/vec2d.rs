//! Immutable 2D vectors over nalgebra's `Vector2<f64>`.
//!
//! - Cartesian construction is exact; polar construction goes through
//!   `Angle::sin_cos`, so it carries the usual trig rounding.
//! - `==` is exact componentwise equality. Use `approx_eq` or
//!   `cfg::Tolerance` for bounded comparison.
//! - Operators live in `ops`.

use std::f64::consts::PI;
use std::fmt;

use nalgebra::{ArrayStorage, Vector2};

use crate::Angle;

/// 2D Cartesian point/vector.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct Vec2d(pub(crate) Vector2<f64>);

impl Vec2d {
    /// The origin.
    pub const ZERO: Vec2d = Vec2d(Vector2::from_array_storage(ArrayStorage([[0.0, 0.0]])));

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    /// `(radius * cos, radius * sin)`. A negative radius reflects through the origin.
    #[inline]
    pub fn from_polar(radius: f64, angle: Angle) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self(Vector2::new(cos, sin) * radius)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Euclidean norm, never negative.
    #[inline]
    pub fn length(&self) -> f64 {
        self.0.norm()
    }

    /// `x² + y²`; prefer this over `length` when only ranking lengths.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    /// Direction as `atan2(y, x)` in `(-π, π]`. The zero vector (either sign) maps to `Angle::ZERO`.
    pub fn angle(&self) -> Angle {
        if self.0.x == 0.0 && self.0.y == 0.0 {
            return Angle::ZERO;
        }
        let theta = self.0.y.atan2(self.0.x);
        // atan2(-0.0, x < 0) is -π; keep the negative x-axis at +π.
        if theta == -PI {
            return Angle::from_radians(PI);
        }
        Angle::from_radians(theta)
    }

    #[inline]
    pub fn as_vector(&self) -> &Vector2<f64> {
        &self.0
    }

    /// Componentwise `|a - b| <= eps`.
    #[inline]
    pub fn approx_eq(&self, other: &Vec2d, eps: f64) -> bool {
        (self.0.x - other.0.x).abs() <= eps && (self.0.y - other.0.y).abs() <= eps
    }
}

impl Default for Vec2d {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Vector2<f64>> for Vec2d {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self(v)
    }
}

impl From<Vec2d> for Vector2<f64> {
    #[inline]
    fn from(v: Vec2d) -> Self {
        v.0
    }
}

impl From<(f64, f64)> for Vec2d {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vec2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.0.x, p, self.0.y),
            None => write!(f, "({}, {})", self.0.x, self.0.y),
        }
    }
}
