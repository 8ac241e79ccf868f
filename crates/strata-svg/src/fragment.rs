use thiserror::Error;

use strata_core::geometry::Polyline;
use strata_core::palette::Palette;
use strata_core::{CANVAS_HEIGHT, CANVAS_WIDTH};

use crate::style::render_polyline;

/// Stable identifier of the layer group. Minifiers must preserve element
/// ids, so downstream composition can address the layer by this name.
pub const GROUP_ID: &str = "artLayer";

/// Hard ceiling on fragment size accepted by the persistence pipeline,
/// distinct from the per-layer soft refinement target.
pub const MAX_FRAGMENT_BYTES: usize = 240_000;

#[derive(Error, Debug)]
pub enum FragmentSizeError {
    #[error("fragment size {size} exceeds maximum allowed {max}")]
    TooLarge { size: usize, max: usize },
}

/// Assemble the layer fragment: one named group of stroked paths.
///
/// `variant_id` and `mode_name` scope the per-polyline color seeds, so two
/// variants sharing a polyline id still color independently.
pub fn render_fragment(
    paths: &[Polyline],
    palette: &Palette,
    variant_id: u32,
    mode_name: &str,
) -> String {
    let mut body = format!("<g id=\"{GROUP_ID}\">");
    for line in paths {
        let color_seed = format!("{variant_id}-{mode_name}-{}", line.id);
        body.push_str(&render_polyline(line, palette, &color_seed));
    }
    body.push_str("</g>");
    body
}

/// Wrap a fragment in a standalone document for local preview. The inner
/// fragment, not this wrapper, is the artifact of record.
pub fn wrap_preview(fragment: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">{fragment}</svg>",
        w = CANVAS_WIDTH as u32,
        h = CANVAS_HEIGHT as u32,
    )
}

/// Reject fragments the persistence layer could never accept.
pub fn validate_fragment_size(fragment: &str, max: usize) -> Result<(), FragmentSizeError> {
    let size = fragment.len();
    if size > max {
        return Err(FragmentSizeError::TooLarge { size, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::geometry::Point;
    use strata_core::palette::Rgb;

    fn sample_paths() -> Vec<Polyline> {
        vec![Polyline {
            id: "arc".to_string(),
            points: (0..40).map(|i| Point::new(i as f64, 210.0)).collect(),
            stroke_width: 2.0,
            dash_gap: Some(5.0),
            opacity: 0.86,
            segments: 12,
        }]
    }

    fn palette() -> Palette {
        Palette::from_colors(vec![Rgb::new(40, 40, 200), Rgb::new(200, 40, 40)])
    }

    #[test]
    fn test_fragment_is_a_single_named_group() {
        let fragment = render_fragment(&sample_paths(), &palette(), 0, "butterfly");
        assert!(fragment.starts_with(&format!("<g id=\"{GROUP_ID}\">")));
        assert!(fragment.ends_with("</g>"));
        // only stroked paths inside, no other element kinds
        assert!(fragment.contains("<path "));
        assert!(!fragment.contains("<filter"));
        assert!(!fragment.contains("<image"));
    }

    #[test]
    fn test_preview_wraps_fragment_verbatim() {
        let fragment = render_fragment(&sample_paths(), &palette(), 0, "butterfly");
        let doc = wrap_preview(&fragment);
        assert!(doc.starts_with("<svg xmlns="));
        assert!(doc.contains("viewBox=\"0 0 420 420\""));
        assert!(doc.contains(&fragment));
        assert!(doc.ends_with("</svg>"));
    }

    #[test]
    fn test_size_guard() {
        assert!(validate_fragment_size("<g></g>", 100).is_ok());
        let err = validate_fragment_size("<g>xxxxxxxxxx</g>", 10).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_variant_id_scopes_chunk_colors() {
        let a = render_fragment(&sample_paths(), &palette(), 0, "butterfly");
        let b = render_fragment(&sample_paths(), &palette(), 1, "butterfly");
        assert_ne!(a, b);
    }
}
