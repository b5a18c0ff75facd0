//! Exact 2D geometry kernel: angles and vectors.
//!
//! - `Angle`: one stored radian value with degree and percent-of-turn views.
//! - `Vec2d`: Cartesian/polar 2D vector with length metrics.
//! - `ops`: `+`, `-` and unary `-` over `Vec2d`.
//! - `cfg`: explicit tolerances for approximate comparison.
//!
//! Every operation is a total, pure function over `f64`. Nothing validates
//! inputs; NaN and infinities propagate. Equality is exact and angles are
//! never normalized into one turn.

pub mod angle;
pub mod cfg;
mod ops;
pub mod vec2d;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use angle::Angle;
pub use cfg::{Tolerance, ACCURACY};
pub use vec2d::Vec2d;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{Tolerance, ACCURACY};
    pub use crate::{Angle, Vec2d};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests;
