use serde::{Deserialize, Serialize};

use strata_core::palette::Palette;
use strata_core::seed::Seed;
use strata_modes::Mode;
use strata_svg::wrap_preview;

use crate::error::GenerateError;
use crate::refiner::{refine, RefineOutcome};

/// Default soft size target for one layer fragment: 20 KiB.
pub const DEFAULT_TARGET_BYTES: usize = 20 * 1024;

/// What a generation call reports alongside the fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDiagnostics {
    pub variant_id: u32,
    pub mode: Mode,
    pub achieved_detail: u32,
    pub achieved_bytes: usize,
    pub exceeded_budget: bool,
    /// Palette colors as hex strings, in blend order.
    pub palette: Vec<String>,
}

impl VariantDiagnostics {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One generated layer: the fragment of record plus its diagnostics.
#[derive(Debug, Clone)]
pub struct GeneratedVariant {
    /// The named stroked-path group consumed by downstream collaborators.
    pub fragment: String,
    pub diagnostics: VariantDiagnostics,
}

impl GeneratedVariant {
    /// Standalone document for local preview only; never persisted.
    pub fn preview_document(&self) -> String {
        wrap_preview(&self.fragment)
    }
}

/// Generate one layer with the default size target.
pub fn generate_variant(
    variant_id: u32,
    mode_name: &str,
    collection_salt: &str,
) -> Result<GeneratedVariant, GenerateError> {
    generate_variant_with_target(variant_id, mode_name, collection_salt, DEFAULT_TARGET_BYTES)
}

/// Generate one layer against an explicit size target.
///
/// Pure and deterministic: identical inputs produce byte-identical
/// fragments. The base seed fans out into isolated geometry and palette
/// streams so neither can contaminate the other.
pub fn generate_variant_with_target(
    variant_id: u32,
    mode_name: &str,
    collection_salt: &str,
    target_bytes: usize,
) -> Result<GeneratedVariant, GenerateError> {
    let mode = Mode::from_name(mode_name)
        .ok_or_else(|| GenerateError::UnknownMode(mode_name.to_string()))?;

    let base = Seed::derive(&[collection_salt, &variant_id.to_string(), mode.name()]);
    let geometry_seed = base.child("geometry");
    let palette_seed = base.child("palette");
    let palette = Palette::generate(&palette_seed);

    let RefineOutcome {
        fragment,
        achieved_detail,
        achieved_bytes,
        exceeded_budget,
    } = refine(
        mode,
        &geometry_seed,
        &palette,
        variant_id,
        mode.schedule(),
        target_bytes,
    )?;

    Ok(GeneratedVariant {
        fragment,
        diagnostics: VariantDiagnostics {
            variant_id,
            mode,
            achieved_detail,
            achieved_bytes,
            exceeded_budget,
            palette: palette.hex_colors(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_generate_variant_is_byte_identical() {
        init_logging();
        let a = generate_variant(0, "butterfly", "salt-A").unwrap();
        let b = generate_variant(0, "butterfly", "salt-A").unwrap();
        assert_eq!(a.fragment, b.fragment);
        assert_eq!(a.diagnostics, b.diagnostics);
    }

    #[test]
    fn test_attractor_meets_budget_or_reports_floor() {
        let out = generate_variant(0, "strangeAttractor", "salt-A").unwrap();
        if out.diagnostics.exceeded_budget {
            assert_eq!(out.diagnostics.achieved_detail, 90);
        } else {
            assert!(out.diagnostics.achieved_bytes <= 20 * 1024);
            assert!(out.fragment.len() <= 20 * 1024);
        }
    }

    #[test]
    fn test_unknown_mode_is_fatal() {
        let err = generate_variant(0, "doesNotExist", "salt-A").unwrap_err();
        match err {
            GenerateError::UnknownMode(name) => assert_eq!(name, "doesNotExist"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_salt_changes_geometry() {
        let a = generate_variant(0, "phyllotaxisBloom", "A").unwrap();
        let b = generate_variant(0, "phyllotaxisBloom", "B").unwrap();
        assert_ne!(a.fragment, b.fragment);
        // already the first path's coordinates differ
        let first_path = |frag: &str| {
            let start = frag.find("d=\"").map(|i| i + 3).unwrap();
            let end = start + frag[start..].find('"').unwrap();
            frag[start..end].to_string()
        };
        assert_ne!(first_path(&a.fragment), first_path(&b.fragment));
    }

    #[test]
    fn test_variant_id_changes_output() {
        let a = generate_variant(0, "ribbonBraid", "salt-A").unwrap();
        let b = generate_variant(1, "ribbonBraid", "salt-A").unwrap();
        assert_ne!(a.fragment, b.fragment);
    }

    #[test]
    fn test_every_mode_generates() {
        for mode in Mode::ALL {
            let out = generate_variant(7, mode.name(), "coverage").unwrap();
            assert!(out.fragment.starts_with("<g id=\"artLayer\">"));
            assert!(out.fragment.ends_with("</g>"));
            let n = out.diagnostics.palette.len();
            assert!((1..=3).contains(&n), "{}", mode.name());
        }
    }

    #[test]
    fn test_preview_wraps_but_never_replaces_fragment() {
        let out = generate_variant(0, "helicalSpring", "salt-A").unwrap();
        let doc = out.preview_document();
        assert!(doc.contains(&out.fragment));
        assert!(out.fragment.len() < doc.len());
    }

    #[test]
    fn test_diagnostics_json_roundtrip() {
        let out = generate_variant(2, "magneticField", "salt-A").unwrap();
        let json = out.diagnostics.to_json().unwrap();
        let back = VariantDiagnostics::from_json(&json).unwrap();
        assert_eq!(back, out.diagnostics);
    }

    #[test]
    fn test_concurrent_calls_match_serial() {
        let serial = generate_variant(5, "lissajousWeb", "salt-A").unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| generate_variant(5, "lissajousWeb", "salt-A").unwrap()))
            .collect();
        for handle in handles {
            let parallel = handle.join().unwrap();
            assert_eq!(parallel.fragment, serial.fragment);
        }
    }
}
