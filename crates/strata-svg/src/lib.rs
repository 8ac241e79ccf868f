//! # Strata SVG
//!
//! Turns styled polylines into the compact stroked-path markup the
//! persistence pipeline stores. Output contains a single named group of
//! `<path>` primitives only: no filters, no raster data, no external
//! references, so a minifier can rewrite it losslessly.

pub mod fmt;
pub mod fragment;
pub mod style;

pub use fragment::{
    render_fragment, validate_fragment_size, wrap_preview, FragmentSizeError, GROUP_ID,
    MAX_FRAGMENT_BYTES,
};
pub use style::{render_polyline, split_polyline};
