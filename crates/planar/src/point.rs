//! Absolute positions in the plane.
//!
//! - Construction: `origin`, `new`/`p2f`.
//! - Affine helpers about the origin: `translate`/`translate_by`, `scale`/`scale_by`,
//!   `rotate` (degrees, counter-clockwise).
//! - Two-argument and vector-argument forms of the same transform are separate
//!   methods; the vector form reads its components as displacement or factors.

use std::fmt;
use std::ops::{Add, Sub};

use nalgebra::{Point2, Rotation2, Vector2};

use crate::util::{approx_eq, deg_to_rad, fmt_pair};
use crate::vector::Vector2f;

/// 2D point with `f32` coordinates. Equality is plain coordinate equality.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2f {
    pub x: f32,
    pub y: f32,
}

/// Shorthand for [`Point2f::new`].
#[inline]
pub const fn p2f(x: f32, y: f32) -> Point2f {
    Point2f::new(x, y)
}

impl Point2f {
    /// The origin `(0, 0)`.
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `(x + dx, y + dy)`.
    #[inline]
    #[must_use]
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Translate by the components of `v`.
    #[inline]
    #[must_use]
    pub fn translate_by(self, v: Vector2f) -> Self {
        self.translate(v.x, v.y)
    }

    /// Homothety about the origin with independent axis factors: `(x·sx, y·sy)`.
    #[inline]
    #[must_use]
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    /// Per-axis scale using the components of `factors`.
    #[inline]
    #[must_use]
    pub fn scale_by(self, factors: Vector2f) -> Self {
        self.scale(factors.x, factors.y)
    }

    /// Counter-clockwise rotation about the origin by `angle_deg` degrees:
    /// `x' = x cos θ − y sin θ`, `y' = x sin θ + y cos θ`.
    #[must_use]
    pub fn rotate(self, angle_deg: f32) -> Self {
        let rot = Rotation2::new(deg_to_rad(angle_deg));
        (rot * Point2::<f32>::from(self)).into()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point2f) -> f32 {
        (*other - *self).length()
    }

    /// Position vector from the origin.
    #[inline]
    pub fn to_vector(self) -> Vector2f {
        Vector2f::new(self.x, self.y)
    }

    /// Componentwise `|a - b| <= eps`.
    #[inline]
    pub fn approx_eq(&self, other: &Point2f, eps: f32) -> bool {
        approx_eq(self.x, other.x, eps) && approx_eq(self.y, other.y, eps)
    }
}

impl fmt::Display for Point2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_pair(f, self.x, self.y)
    }
}

impl Add<Vector2f> for Point2f {
    type Output = Point2f;
    #[inline]
    fn add(self, rhs: Vector2f) -> Self::Output {
        self.translate_by(rhs)
    }
}

impl Sub<Vector2f> for Point2f {
    type Output = Point2f;
    #[inline]
    fn sub(self, rhs: Vector2f) -> Self::Output {
        self.translate(-rhs.x, -rhs.y)
    }
}

/// `b - a` is the displacement from `a` to `b`.
impl Sub for Point2f {
    type Output = Vector2f;
    #[inline]
    fn sub(self, rhs: Point2f) -> Self::Output {
        Vector2f::between(rhs, self)
    }
}

impl From<Point2<f32>> for Point2f {
    #[inline]
    fn from(p: Point2<f32>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2f> for Point2<f32> {
    #[inline]
    fn from(p: Point2f) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<Point2f> for Vector2<f32> {
    #[inline]
    fn from(p: Point2f) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<[f32; 2]> for Point2f {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2f> for [f32; 2] {
    #[inline]
    fn from(p: Point2f) -> Self {
        [p.x, p.y]
    }
}
