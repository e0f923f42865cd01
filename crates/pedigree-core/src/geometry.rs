//! Scaffolding shapes and angle helpers.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Tolerance used by [`approx_eq`].
pub const EPSILON: f64 = 1e-7;

/// Check whether two scalars are equal within [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Normalize an angle in radians into `[0, 2π)`.
pub fn normalize_rad(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if normalized >= TAU { 0.0 } else { normalized }
}

/// A piece of connector geometry between glyphs, in layout coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scaffold {
    /// Straight segment.
    Line { from: Point, to: Point },
    /// Circular arc of radius `r` from `from` to `to`.
    ///
    /// `from_angle` and `to_angle` are the polar angles of the endpoints
    /// around the arc's center; they select which of the two arcs is drawn.
    Arc {
        from: Point,
        to: Point,
        r: f64,
        from_angle: f64,
        to_angle: f64,
    },
    /// Quadratic curve through control point `cp`.
    Bezier { from: Point, to: Point, cp: Point },
    /// A shape kind this version does not know. Renderers skip it.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_rad() {
        assert!(approx_eq(normalize_rad(0.0), 0.0));
        assert!(approx_eq(normalize_rad(-PI / 2.0), 3.0 * PI / 2.0));
        assert!(approx_eq(normalize_rad(5.0 * PI), PI));
        assert!(approx_eq(normalize_rad(TAU), 0.0));
        assert!(normalize_rad(-1e-18) < TAU);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-9));
        assert!(!approx_eq(1.0, 1.001));
    }

    #[test]
    fn test_deserialize_shapes() {
        let json = r#"[
            {"kind": "line", "from": {"x": 0.0, "y": 0.0}, "to": {"x": 10.0, "y": 0.0}},
            {"kind": "arc", "from": {"x": 10.0, "y": 0.0}, "to": {"x": 0.0, "y": 10.0},
             "r": 10.0, "from_angle": 0.0, "to_angle": 1.5707963267948966},
            {"kind": "bezier", "from": {"x": 0.0, "y": 0.0}, "to": {"x": 4.0, "y": 0.0},
             "cp": {"x": 2.0, "y": 2.0}},
            {"kind": "spiral", "turns": 3}
        ]"#;
        let shapes: Vec<Scaffold> = serde_json::from_str(json).unwrap();
        assert_eq!(shapes.len(), 4);
        assert_eq!(
            shapes[0],
            Scaffold::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(10.0, 0.0)
            }
        );
        assert!(matches!(shapes[1], Scaffold::Arc { r, .. } if approx_eq(r, 10.0)));
        assert!(matches!(shapes[2], Scaffold::Bezier { cp, .. } if cp == Point::new(2.0, 2.0)));
        assert_eq!(shapes[3], Scaffold::Unknown);
    }
}
