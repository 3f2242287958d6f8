//! Plane geometry core: points and vectors in R² with single-precision coordinates.
//!
//! Overview
//! - `Point2f`: absolute location; affine helpers (translate, per-axis scale about
//!   the origin, CCW rotation about the origin in degrees).
//! - `Vector2f`: displacement; arithmetic, dot, length, normalization, lerp and the
//!   2D determinant.
//! - Both are plain `Copy` values. Every operation is a pure function returning a new
//!   value; nothing here allocates or keeps state.
//!
//! Zero-length normalization
//! - `Vector2f::normalize` returns `None` for a zero (or non-finite) length instead of
//!   dividing by zero. Callers choose what to do with the degenerate case.

pub mod point;
pub mod util;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use point::{p2f, Point2f};
pub use util::{approx_eq, deg_to_rad, full_turn_steps, GeomCfg};
pub use vector::{v2f, Vector2f};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::point::{p2f, Point2f};
    pub use crate::util::{approx_eq, full_turn_steps, GeomCfg};
    pub use crate::vector::{v2f, Vector2f};
}
