//! Path segmentation and along-path styling.
//!
//! A polyline is split into contiguous chunks that become individually
//! stroked paths. Chunk colors walk the palette blend from one end of the
//! line to the other, perturbed by a hash of `(color seed, chunk index)`,
//! and stroke width wobbles on a small index cycle; styling never draws
//! from the generation stream, so cosmetic subdivision cannot perturb
//! geometry determinism.

use strata_core::geometry::{clamp01, Point, Polyline};
use strata_core::palette::Palette;
use strata_core::seed::hash_unit;

use crate::fmt::{fmt1, fmt_opacity};

/// Split `points` into at most `target_segments` contiguous chunks.
/// Adjacent chunks share their boundary point so strokes stay visually
/// continuous. A chunk never has fewer than 2 points; a polyline with too
/// few points yields fewer chunks.
pub fn split_polyline(points: &[Point], target_segments: u32) -> Vec<&[Point]> {
    if points.len() < 2 {
        return Vec::new();
    }
    let safe_segments = (target_segments as usize).clamp(1, points.len() - 1);
    let mut chunks = Vec::with_capacity(safe_segments);
    let mut cursor = 0usize;

    for i in 0..safe_segments {
        let remaining_segments = safe_segments - i;
        let remaining_points = points.len().saturating_sub(cursor);
        let len = if i == safe_segments - 1 {
            remaining_points
        } else {
            (remaining_points / remaining_segments).max(2)
        };
        let start = cursor.min(points.len());
        let end = (cursor + len).min(points.len());
        if end - start >= 2 {
            chunks.push(&points[start..end]);
        }
        cursor += len - 1;
    }

    chunks
}

fn points_to_path(points: &[Point]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    let mut d = String::with_capacity(points.len() * 12);
    d.push_str(&format!("M{} {}", fmt1(first.x), fmt1(first.y)));
    for p in rest {
        d.push_str(&format!("L{} {}", fmt1(p.x), fmt1(p.y)));
    }
    d
}

/// Render one polyline as a run of stroked `<path>` elements, one per
/// chunk. `color_seed` scopes the per-chunk color perturbation to this
/// polyline so sibling lines vary independently.
pub fn render_polyline(line: &Polyline, palette: &Palette, color_seed: &str) -> String {
    let chunks = split_polyline(&line.points, line.segments);
    let total = chunks.len();
    let mut out = String::new();

    for (index, chunk) in chunks.iter().enumerate() {
        let base_t = if total <= 1 {
            0.5
        } else {
            index as f64 / (total - 1) as f64
        };
        let noise = hash_unit(&format!("{color_seed}|{index}")) - 0.5;
        let mix = clamp01(base_t + noise * 0.12);
        let stroke = palette.blend_hex(mix);
        let width = line.stroke_width + (index % 3) as f64 * 0.2;
        let d = points_to_path(chunk);

        out.push_str(&format!(
            "<path d=\"{d}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{}\" stroke-linecap=\"round\" opacity=\"{}\"",
            fmt1(width),
            fmt_opacity(line.opacity),
        ));
        if let Some(gap) = line.dash_gap {
            out.push_str(&format!(" stroke-dasharray=\"0 {}\"", fmt1(gap)));
        }
        out.push_str("/>");
    }

    out
}
