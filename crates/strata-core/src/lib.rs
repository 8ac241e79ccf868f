//! # Strata Core
//!
//! Foundational data model for the Strata layer generator: the logical
//! canvas, 2-D geometry and polylines, hierarchical seed derivation, the
//! deterministic random stream, and palette construction with continuous
//! color blending.
//!
//! Everything in this crate is pure computation; no I/O, no shared state.

pub mod geometry;
pub mod palette;
pub mod rng;
pub mod seed;

pub use geometry::{Point, Polyline};
pub use palette::{Palette, Rgb};
pub use rng::Rng;
pub use seed::Seed;

/// Logical canvas width shared by every layer in a composition.
pub const CANVAS_WIDTH: f64 = 420.0;
/// Logical canvas height shared by every layer in a composition.
pub const CANVAS_HEIGHT: f64 = 420.0;
/// Horizontal canvas center.
pub const CENTER_X: f64 = CANVAS_WIDTH / 2.0;
/// Vertical canvas center.
pub const CENTER_Y: f64 = CANVAS_HEIGHT / 2.0;
