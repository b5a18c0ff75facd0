use planar::{Angle, Tolerance, Vec2d};
use serde::Serialize;

/// Reports whose numbers must all be finite before they are emitted as JSON,
/// which has no encoding for NaN or infinities.
pub trait Finite {
    fn is_finite(&self) -> bool;
}

/// Every view of one angle.
#[derive(Debug, Serialize, PartialEq)]
pub struct AngleReport {
    pub radians: f64,
    pub degrees: f64,
    pub percent: f64,
    pub sin: f64,
    pub cos: f64,
    pub tan: f64,
}

impl From<Angle> for AngleReport {
    fn from(a: Angle) -> Self {
        Self {
            radians: a.radians(),
            degrees: a.degrees(),
            percent: a.percent(),
            sin: a.sin(),
            cos: a.cos(),
            tan: a.tan(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct VecReport {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub length_squared: f64,
    pub angle_degrees: f64,
}

impl From<Vec2d> for VecReport {
    fn from(v: Vec2d) -> Self {
        Self {
            x: v.x(),
            y: v.y(),
            length: v.length(),
            length_squared: v.length_squared(),
            angle_degrees: v.angle().degrees(),
        }
    }
}

impl Finite for AngleReport {
    fn is_finite(&self) -> bool {
        [self.radians, self.degrees, self.percent, self.sin, self.cos, self.tan]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Finite for VecReport {
    fn is_finite(&self) -> bool {
        [self.x, self.y, self.length, self.length_squared, self.angle_degrees]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Raw (unnormalized) comparison of two angles.
#[derive(Debug, Serialize, PartialEq)]
pub struct CompareReport {
    pub equal: bool,
    pub less: bool,
    pub greater: bool,
    pub approx_equal: bool,
    pub eps: f64,
}

impl CompareReport {
    pub fn new(a: Angle, b: Angle, tol: Tolerance) -> Self {
        Self {
            equal: a == b,
            less: a < b,
            greater: a > b,
            approx_equal: tol.angles(a, b),
            eps: tol.eps,
        }
    }
}

impl Finite for CompareReport {
    fn is_finite(&self) -> bool {
        self.eps.is_finite()
    }
}
