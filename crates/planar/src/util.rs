//! Angle conversion and tolerance helpers shared by `Point2f` and `Vector2f`.

use std::fmt;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Absolute per-component tolerance for approximate comparisons.
    pub eps: f32,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: 1e-5 }
    }
}

/// Degrees → radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg.to_radians()
}

/// `|a - b| <= eps`. Non-finite inputs never compare equal.
#[inline]
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

/// Angles `0, step, 2·step, …` in degrees, strictly below one full turn.
///
/// Each angle is `i · step`, so small steps keep advancing instead of stalling once
/// they drop below the spacing of `f32` values near the running total. A step that is
/// not positive and finite yields nothing.
pub fn full_turn_steps(step_deg: f32) -> impl Iterator<Item = f32> {
    let valid = step_deg > 0.0 && step_deg.is_finite();
    let step = f64::from(step_deg);
    (0u64..)
        .map(move |i| i as f64 * step)
        .take_while(move |&angle| valid && angle < 360.0)
        .map(|angle| angle as f32)
}

/// Writes `(x, y)`, honoring the formatter's precision (`{:.2}`) when one is set.
pub(crate) fn fmt_pair(f: &mut fmt::Formatter<'_>, x: f32, y: f32) -> fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "({x:.p$}, {y:.p$})"),
        None => write!(f, "({x}, {y})"),
    }
}
