//! Displacements in the plane.
//!
//! - Construction: `zeros`, `new`/`v2f`, `between(a, b)` (= `b - a`).
//! - Arithmetic via `std::ops` (`+`, `-`, unary `-`, `* f32`) plus named helpers.
//! - Scalars: `dot`, `length`, `determinant` (signed parallelogram area).
//! - `normalize` is the only partial operation: `None` on a degenerate vector.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use nalgebra::Vector2;

use crate::point::Point2f;
use crate::util::{approx_eq, fmt_pair};

/// 2D vector with `f32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

/// Shorthand for [`Vector2f::new`].
#[inline]
pub const fn v2f(x: f32, y: f32) -> Vector2f {
    Vector2f::new(x, y)
}

impl Vector2f {
    /// The zero vector.
    #[inline]
    pub const fn zeros() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Displacement from `a` to `b`: `(b.x − a.x, b.y − a.y)`.
    #[inline]
    pub fn between(a: Point2f, b: Point2f) -> Self {
        Self::new(b.x - a.x, b.y - a.y)
    }

    /// Componentwise scale by `k`.
    #[inline]
    #[must_use]
    pub fn scale(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    #[inline]
    pub fn dot(&self, other: &Vector2f) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean norm `sqrt(x² + y²)`, without intermediate overflow or underflow.
    #[inline]
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction.
    ///
    /// Returns `None` for the zero vector or any non-finite component. Every other
    /// finite vector normalizes, including ones whose length overflows `f32`.
    pub fn normalize(&self) -> Option<Vector2f> {
        let m = self.x.abs().max(self.y.abs());
        if !self.x.is_finite() || !self.y.is_finite() || m <= 0.0 {
            return None;
        }
        // rescale so the larger component is ±1
        let s = Self::new(self.x / m, self.y / m);
        let len = s.length();
        Some(Self::new(s.x / len, s.y / len))
    }

    /// `self + t·(other − self)`. `t` is not clamped, so values outside `[0, 1]`
    /// extrapolate along the line.
    #[inline]
    #[must_use]
    pub fn lerp(&self, other: &Vector2f, t: f32) -> Self {
        *self + (*other - *self) * t
    }

    /// 2D cross product `x₁y₂ − y₁x₂`: signed area of the parallelogram spanned by
    /// `(self, other)`, positive when `other` lies counter-clockwise of `self`.
    #[inline]
    pub fn determinant(&self, other: &Vector2f) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Quarter turn counter-clockwise: `(−y, x)`.
    #[inline]
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// The point reached from the origin by this displacement.
    #[inline]
    pub fn to_point(self) -> Point2f {
        Point2f::new(self.x, self.y)
    }

    /// Componentwise `|a - b| <= eps`.
    #[inline]
    pub fn approx_eq(&self, other: &Vector2f, eps: f32) -> bool {
        approx_eq(self.x, other.x, eps) && approx_eq(self.y, other.y, eps)
    }
}

impl fmt::Display for Vector2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_pair(f, self.x, self.y)
    }
}

impl Add for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn add(self, rhs: Vector2f) -> Self::Output {
        Vector2f {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn sub(self, rhs: Vector2f) -> Self::Output {
        Vector2f {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2f {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f32> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn mul(self, k: f32) -> Self::Output {
        self.scale(k)
    }
}

impl Mul<Vector2f> for f32 {
    type Output = Vector2f;
    #[inline]
    fn mul(self, v: Vector2f) -> Self::Output {
        v.scale(self)
    }
}

impl AddAssign for Vector2f {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2f) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2f {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2f) {
        *self = *self - rhs;
    }
}

impl From<Vector2<f32>> for Vector2f {
    #[inline]
    fn from(v: Vector2<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2f> for Vector2<f32> {
    #[inline]
    fn from(v: Vector2f) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<[f32; 2]> for Vector2f {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2f> for [f32; 2] {
    #[inline]
    fn from(v: Vector2f) -> Self {
        [v.x, v.y]
    }
}
