//! Vector-vector operators: `+`, binary `-`, unary `-`.
//!
//! All are componentwise and delegate to nalgebra. Owned and borrowed
//! operands are both accepted. There is intentionally no dot/cross product
//! or scalar multiplication at this layer.

use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

use crate::Vec2d;

impl Add for Vec2d {
    type Output = Vec2d;
    #[inline]
    fn add(self, rhs: Vec2d) -> Self::Output {
        Vec2d(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Vec2d> for &'a Vec2d {
    type Output = Vec2d;
    #[inline]
    fn add(self, rhs: &'a Vec2d) -> Self::Output {
        Vec2d(self.0 + rhs.0)
    }
}

impl Sub for Vec2d {
    type Output = Vec2d;
    #[inline]
    fn sub(self, rhs: Vec2d) -> Self::Output {
        Vec2d(self.0 - rhs.0)
    }
}

impl<'a> Sub<&'a Vec2d> for &'a Vec2d {
    type Output = Vec2d;
    #[inline]
    fn sub(self, rhs: &'a Vec2d) -> Self::Output {
        Vec2d(self.0 - rhs.0)
    }
}

impl Neg for Vec2d {
    type Output = Vec2d;
    #[inline]
    fn neg(self) -> Self::Output {
        Vec2d(-self.0)
    }
}

impl Neg for &Vec2d {
    type Output = Vec2d;
    #[inline]
    fn neg(self) -> Self::Output {
        Vec2d(-self.0)
    }
}

impl Sum for Vec2d {
    fn sum<I: Iterator<Item = Vec2d>>(iter: I) -> Self {
        iter.fold(Vec2d::ZERO, |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Vec2d> for Vec2d {
    fn sum<I: Iterator<Item = &'a Vec2d>>(iter: I) -> Self {
        iter.fold(Vec2d::ZERO, |acc, v| acc + *v)
    }
}
