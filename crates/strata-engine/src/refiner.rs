//! The byte-budget refinement loop.
//!
//! Building → Measuring → {Accept | ReduceDetail} → Building … until the
//! fragment fits or the schedule floor is reached. Every build re-derives
//! a fresh random stream from the *same* geometry seed, so reducing detail
//! changes only sample density; the underlying random choices, and with
//! them the variant's visual identity, stay fixed.

use strata_core::palette::Palette;
use strata_core::rng::Rng;
use strata_core::seed::Seed;
use strata_modes::{Mode, ModeSchedule};
use strata_svg::render_fragment;

use crate::error::GenerateError;

/// Result of a refinement run. `exceeded_budget` is a soft, reported
/// condition; the best-effort fragment is always returned.
#[derive(Debug, Clone)]
pub struct RefineOutcome {
    pub fragment: String,
    pub achieved_detail: u32,
    pub achieved_bytes: usize,
    pub exceeded_budget: bool,
}

enum Phase {
    Building,
    Measuring,
    ReduceDetail,
}

/// Refine `mode` against `target_bytes`, walking detail down by the given
/// schedule. Terminates in at most `schedule.max_rounds()` builds.
pub fn refine(
    mode: Mode,
    geometry_seed: &Seed,
    palette: &Palette,
    variant_id: u32,
    schedule: ModeSchedule,
    target_bytes: usize,
) -> Result<RefineOutcome, GenerateError> {
    let mut detail = schedule.start;
    let mut phase = Phase::Building;
    let mut fragment = String::new();
    let mut bytes = 0usize;

    loop {
        match phase {
            Phase::Building => {
                let mut rng = Rng::from_seed(geometry_seed);
                let paths = mode.build(&mut rng, detail);
                if paths.is_empty() {
                    return Err(GenerateError::DegenerateGeometry {
                        mode: mode.name(),
                        reason: "builder returned no polylines".to_string(),
                    });
                }
                if let Some(bad) = paths.iter().find(|p| p.is_degenerate()) {
                    return Err(GenerateError::DegenerateGeometry {
                        mode: mode.name(),
                        reason: format!("polyline '{}' has fewer than 2 finite points", bad.id),
                    });
                }
                fragment = render_fragment(&paths, palette, variant_id, mode.name());
                phase = Phase::Measuring;
            }
            Phase::Measuring => {
                bytes = fragment.len();
                log::debug!(
                    "{}: detail={} bytes={} target={}",
                    mode.name(),
                    detail,
                    bytes,
                    target_bytes
                );
                if bytes <= target_bytes {
                    log::info!("{}: accepted at detail={} ({} bytes)", mode.name(), detail, bytes);
                    return Ok(RefineOutcome {
                        fragment,
                        achieved_detail: detail,
                        achieved_bytes: bytes,
                        exceeded_budget: false,
                    });
                }
                phase = Phase::ReduceDetail;
            }
            Phase::ReduceDetail => {
                let next = detail.saturating_sub(schedule.step).max(schedule.min);
                if next == detail {
                    log::warn!(
                        "{}: budget exhausted at detail floor {} ({} bytes > {})",
                        mode.name(),
                        detail,
                        bytes,
                        target_bytes
                    );
                    return Ok(RefineOutcome {
                        fragment,
                        achieved_detail: detail,
                        achieved_bytes: bytes,
                        exceeded_budget: true,
                    });
                }
                detail = next;
                phase = Phase::Building;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::palette::Rgb;

    fn geometry_seed(salt: &str) -> Seed {
        Seed::derive(&[salt, "0", "butterfly"]).child("geometry")
    }

    fn palette_a() -> Palette {
        Palette::from_colors(vec![Rgb::new(20, 60, 180), Rgb::new(220, 80, 40)])
    }

    fn palette_b() -> Palette {
        Palette::from_colors(vec![Rgb::new(190, 20, 90), Rgb::new(30, 200, 120)])
    }

    /// Pull every `d="…"` attribute out of a fragment, i.e. the pure
    /// geometry with styling stripped away.
    fn path_data(fragment: &str) -> Vec<&str> {
        fragment
            .split("d=\"")
            .skip(1)
            .map(|rest| &rest[..rest.find('"').unwrap()])
            .collect()
    }

    #[test]
    fn test_accepts_at_start_when_budget_is_loose() {
        let outcome = refine(
            Mode::Butterfly,
            &geometry_seed("loose"),
            &palette_a(),
            0,
            Mode::Butterfly.schedule(),
            usize::MAX,
        )
        .unwrap();
        assert!(!outcome.exceeded_budget);
        assert_eq!(outcome.achieved_detail, Mode::Butterfly.schedule().start);
        assert_eq!(outcome.achieved_bytes, outcome.fragment.len());
    }

    #[test]
    fn test_exhausts_at_floor_when_budget_is_impossible() {
        let schedule = Mode::StrangeAttractor.schedule();
        let outcome = refine(
            Mode::StrangeAttractor,
            &geometry_seed("tight"),
            &palette_a(),
            0,
            schedule,
            64, // no fragment is ever this small
        )
        .unwrap();
        assert!(outcome.exceeded_budget);
        assert_eq!(outcome.achieved_detail, schedule.min);
        assert!(outcome.achieved_bytes > 64);
        assert!(!outcome.fragment.is_empty());
    }

    #[test]
    fn test_budget_contract_across_modes() {
        for mode in Mode::ALL {
            let seed = Seed::derive(&["budget", mode.name()]).child("geometry");
            let outcome = refine(mode, &seed, &palette_a(), 0, mode.schedule(), 20 * 1024).unwrap();
            if outcome.exceeded_budget {
                assert_eq!(outcome.achieved_detail, mode.schedule().min, "{}", mode.name());
            } else {
                assert!(outcome.achieved_bytes <= 20 * 1024, "{}", mode.name());
            }
        }
    }

    #[test]
    fn test_refine_is_deterministic() {
        let run = || {
            refine(
                Mode::LissajousWeb,
                &geometry_seed("det"),
                &palette_a(),
                3,
                Mode::LissajousWeb.schedule(),
                20 * 1024,
            )
            .unwrap()
        };
        let a = run();
        let b = run();
        assert_eq!(a.fragment, b.fragment);
        assert_eq!(a.achieved_detail, b.achieved_detail);
    }

    #[test]
    fn test_palette_does_not_perturb_geometry() {
        let seed = geometry_seed("isolation");
        let schedule = Mode::PhyllotaxisBloom.schedule();
        let a = refine(Mode::PhyllotaxisBloom, &seed, &palette_a(), 0, schedule, 20 * 1024).unwrap();
        let b = refine(Mode::PhyllotaxisBloom, &seed, &palette_b(), 0, schedule, 20 * 1024).unwrap();
        assert_eq!(a.achieved_detail, b.achieved_detail);
        assert_eq!(path_data(&a.fragment), path_data(&b.fragment));
        assert_ne!(a.fragment, b.fragment); // colors did change
    }
}
