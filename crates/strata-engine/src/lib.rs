//! # Strata Engine
//!
//! Composes seed derivation, palette generation, the geometry mode library
//! and markup emission into a single `generate_variant` call, with a
//! byte-budget refinement loop that walks a mode's detail level down until
//! the serialized fragment fits its target size.
//!
//! Every generation call is a pure function of `(variant_id, mode,
//! collection_salt)`; independent variants can run concurrently with no
//! coordination.

pub mod error;
pub mod refiner;
pub mod variant;

pub use error::GenerateError;
pub use refiner::{refine, RefineOutcome};
pub use variant::{
    generate_variant, generate_variant_with_target, GeneratedVariant, VariantDiagnostics,
    DEFAULT_TARGET_BYTES,
};
