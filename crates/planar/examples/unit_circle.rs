//! Walk a unit vector around the circle in fixed angular steps.
//!
//! Usage:
//!   cargo run -p planar --example unit_circle -- 30
//!
//! Prints each rotated point with its angle, and the determinant against the
//! starting direction (sin of the angle for unit vectors).

use planar::prelude::*;

fn main() {
    let step: f32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(45.0);
    if step <= 0.0 || !step.is_finite() {
        eprintln!("usage: unit_circle [step_degrees > 0]");
        return;
    }
    let start = p2f(1.0, 0.0);
    let e_x = start.to_vector();
    for angle in full_turn_steps(step) {
        let p = start.rotate(angle);
        println!(
            "{angle:>7.2}°  {p:.4}  det={:+.4}",
            e_x.determinant(&p.to_vector())
        );
    }
}
