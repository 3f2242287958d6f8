//! The walkthrough: each point and vector operation applied once to fixed inputs,
//! rendered as labeled lines.

use std::fmt::Display;

use anyhow::{Context, Result};
use planar::prelude::*;

use crate::DemoArgs;

fn labeled(label: &str, value: impl Display, precision: usize) -> String {
    format!(" {label}: {value:.precision$}")
}

/// Builds the full demo output. Parameters not exposed in `args` are fixed.
pub fn transcript(args: &DemoArgs) -> Result<Vec<String>> {
    let prec = args.precision;
    let mut out = vec![
        String::new(),
        "\t ========== PLANE GEOMETRY ========== ".to_string(),
        String::new(),
        " ====== Points ====== ".to_string(),
    ];

    tracing::debug!("points");
    let p = Point2f::origin();
    out.push(labeled("Null Point", p, prec));

    let p1 = p2f(2.0, 3.0);
    out.push(labeled("Point", p1, prec));

    let (dx, dy) = (-1.0, 1.0);
    let p2 = p1.translate(dx, dy);
    out.push(labeled("Translated", p2, prec));

    let v = v2f(1.0, -1.0);
    out.push(labeled("Translated (vector)", p1.translate_by(v), prec));
    out.push(labeled("Scaled", p1.scale(dx, dy), prec));
    out.push(labeled("Scaled (vector)", p1.scale_by(v), prec));
    out.push(labeled("Rotated", p1.rotate(args.angle), prec));

    tracing::debug!("vectors");
    out.push(String::new());
    out.push(" ====== Vectors ====== ".to_string());

    out.push(labeled("Null Vector", Vector2f::zeros(), prec));

    let v1 = v2f(-3.0, 4.0);
    out.push(labeled("Vector1", v1, prec));

    let v2 = Vector2f::between(p1, p2);
    out.push(labeled("Vector2", v2, prec));

    out.push(labeled("Addition", v1 + v2, prec));
    let diff = v1 - v2;
    out.push(labeled("Subtraction", diff, prec));
    out.push(labeled("Scaled", diff.scale(args.k), prec));
    out.push(labeled("Dot Product", v1.dot(&v2), prec));
    out.push(labeled("Length", v1.length(), prec));

    let unit = v1.normalize().context("Vector1 has zero length")?;
    out.push(labeled("Unit vector", unit, prec));

    let (u, w) = (Vector2f::zeros(), v2f(10.0, 10.0));
    out.push(labeled("Lerp", u.lerp(&w, args.t), prec));
    out.push(labeled("Determinant", v1.determinant(&v2), prec));
    out.push(String::new());
    Ok(out)
}

/// Unit vector of `(x, y)`; the zero vector has no direction and is an error.
pub fn unit_vector(x: f32, y: f32) -> Result<Vector2f> {
    v2f(x, y)
        .normalize()
        .with_context(|| format!("cannot normalize degenerate vector ({x}, {y})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(lines: &'a [String], label: &str) -> &'a str {
        let prefix = format!(" {label}: ");
        lines
            .iter()
            .find_map(|l| l.strip_prefix(prefix.as_str()))
            .unwrap_or_else(|| panic!("missing line {label:?}"))
    }

    #[test]
    fn default_transcript_values() {
        let lines = transcript(&DemoArgs::default()).unwrap();
        assert_eq!(find(&lines, "Null Point"), "(0.00, 0.00)");
        assert_eq!(find(&lines, "Point"), "(2.00, 3.00)");
        assert_eq!(find(&lines, "Translated"), "(1.00, 4.00)");
        assert_eq!(find(&lines, "Translated (vector)"), "(3.00, 2.00)");
        assert_eq!(find(&lines, "Scaled (vector)"), "(2.00, -3.00)");
        assert_eq!(find(&lines, "Rotated"), "(-3.00, 2.00)");
        assert_eq!(find(&lines, "Vector2"), "(-1.00, 1.00)");
        assert_eq!(find(&lines, "Addition"), "(-4.00, 5.00)");
        assert_eq!(find(&lines, "Subtraction"), "(-2.00, 3.00)");
        assert_eq!(find(&lines, "Dot Product"), "7.00");
        assert_eq!(find(&lines, "Length"), "5.00");
        assert_eq!(find(&lines, "Unit vector"), "(-0.60, 0.80)");
        assert_eq!(find(&lines, "Lerp"), "(5.00, 5.00)");
        assert_eq!(find(&lines, "Determinant"), "1.00");
    }

    #[test]
    fn scaled_labels_appear_for_point_and_vector() {
        let lines = transcript(&DemoArgs::default()).unwrap();
        let scaled: Vec<_> = lines
            .iter()
            .filter_map(|l| l.strip_prefix(" Scaled: "))
            .collect();
        assert_eq!(scaled, ["(-2.00, 3.00)", "(-1.00, 1.50)"]);
    }

    #[test]
    fn parameters_flow_into_transcript() {
        let args = DemoArgs {
            angle: 180.0,
            k: 2.0,
            t: 1.5,
            precision: 1,
        };
        let lines = transcript(&args).unwrap();
        assert_eq!(find(&lines, "Rotated"), "(-2.0, -3.0)");
        assert_eq!(find(&lines, "Lerp"), "(15.0, 15.0)");
        let scaled: Vec<_> = lines
            .iter()
            .filter_map(|l| l.strip_prefix(" Scaled: "))
            .collect();
        assert_eq!(scaled[1], "(-4.0, 6.0)");
    }

    #[test]
    fn unit_vector_rejects_zero() {
        let u = unit_vector(0.0, -2.0).unwrap();
        assert_eq!(u, v2f(0.0, -1.0));
        let err = unit_vector(0.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("degenerate"));
    }
}
