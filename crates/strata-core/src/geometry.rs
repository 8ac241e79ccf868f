use serde::{Deserialize, Serialize};

use crate::{CENTER_X, CENTER_Y};

/// A 2D point in canvas coordinates. Points are allowed to lie outside
/// the canvas; clipping is a downstream renderer concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp a value into [0, 1].
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Quadratic ease-in-out over [0, 1].
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// A stroked polyline plus the style parameters its mode declared for it.
///
/// `segments` is the number of sub-paths the styler should split this line
/// into; builders clamp it into [12, 22] via [`clamp_segments`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub id: String,
    pub points: Vec<Point>,
    pub stroke_width: f64,
    /// Gap of the `0 g` dotted-stroke dash trick; `None` renders solid.
    pub dash_gap: Option<f64>,
    pub opacity: f64,
    pub segments: u32,
}

impl Polyline {
    /// A polyline with fewer than 2 points or any non-finite coordinate
    /// cannot be stroked and signals a builder bug.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2 || self.points.iter().any(|p| !p.is_finite())
    }
}

/// Round a raw segment estimate and clamp it into [min, max].
pub fn clamp_segments(value: f64, min: u32, max: u32) -> u32 {
    (value.round() as i64).clamp(min as i64, max as i64) as u32
}

// ── Center-relative transforms ───────────────────────────────────────
//
// Decorative echoes, mirrors and rotated copies are derived from already
// generated points; they draw nothing from the random stream.

/// Scale points toward the canvas center by `factor`.
pub fn scale_toward_center(points: &[Point], factor: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| {
            Point::new(
                CENTER_X + (p.x - CENTER_X) * factor,
                CENTER_Y + (p.y - CENTER_Y) * factor,
            )
        })
        .collect()
}

/// Rotate points about the canvas center by `angle` radians.
pub fn rotate_about_center(points: &[Point], angle: f64) -> Vec<Point> {
    let (sin, cos) = angle.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - CENTER_X;
            let dy = p.y - CENTER_Y;
            Point::new(CENTER_X + dx * cos - dy * sin, CENTER_Y + dx * sin + dy * cos)
        })
        .collect()
}

/// Reflect the vertical offset of each point about the canvas's vertical
/// center, producing the other half of a symmetric shape.
pub fn mirror_vertically(points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x, CENTER_Y - (p.y - CENTER_Y)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_toward_center() {
        let pts = vec![Point::new(CENTER_X + 100.0, CENTER_Y)];
        let scaled = scale_toward_center(&pts, 0.5);
        assert!((scaled[0].x - (CENTER_X + 50.0)).abs() < 1e-10);
        assert!((scaled[0].y - CENTER_Y).abs() < 1e-10);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let pts = vec![Point::new(CENTER_X + 10.0, CENTER_Y)];
        let rotated = rotate_about_center(&pts, std::f64::consts::FRAC_PI_2);
        assert!((rotated[0].x - CENTER_X).abs() < 1e-9);
        assert!((rotated[0].y - (CENTER_Y + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_mirror_is_involution() {
        let pts = vec![Point::new(3.0, CENTER_Y + 42.0), Point::new(7.0, CENTER_Y - 5.0)];
        let twice = mirror_vertically(&mirror_vertically(&pts));
        for (a, b) in pts.iter().zip(twice.iter()) {
            assert!((a.x - b.x).abs() < 1e-10);
            assert!((a.y - b.y).abs() < 1e-10);
        }
    }

    #[test]
    fn test_clamp_segments_range() {
        assert_eq!(clamp_segments(3.0, 12, 22), 12);
        assert_eq!(clamp_segments(15.4, 12, 22), 15);
        assert_eq!(clamp_segments(90.0, 12, 22), 22);
    }

    #[test]
    fn test_degenerate_polyline() {
        let line = Polyline {
            id: "x".to_string(),
            points: vec![Point::new(0.0, 0.0)],
            stroke_width: 1.0,
            dash_gap: None,
            opacity: 1.0,
            segments: 12,
        };
        assert!(line.is_degenerate());

        let bad = Polyline {
            points: vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)],
            ..line.clone()
        };
        assert!(bad.is_degenerate());
    }
}
