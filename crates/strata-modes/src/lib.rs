//! # Strata Modes
//!
//! The closed library of geometry families a layer can be generated from.
//! Each mode is a pure builder turning a random stream and a detail level
//! into a set of stroked polylines, plus a declared refinement schedule
//! describing how detail may be walked down when a layer must shrink.

pub mod builders;

use serde::{Deserialize, Serialize};

use strata_core::geometry::Polyline;
use strata_core::rng::Rng;

/// One named geometry family. The set is closed on purpose: mode dispatch
/// is exhaustive, and an unknown request never falls back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Butterfly,
    LissajousWeb,
    PhyllotaxisBloom,
    SpiralLattice,
    RibbonBraid,
    HelicalSpring,
    FractalFlake,
    OrbitConstellation,
    StrangeAttractor,
    VoronoiSwarm,
    PlanarHarmonic,
    MagneticField,
    FoldedRibbon,
    ParticleDrift,
}

/// Detail-reduction schedule for one mode. Size-vs-detail behavior is
/// non-linear and mode-specific, so every mode declares its own walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSchedule {
    /// Detail level the first build attempt uses.
    pub start: u32,
    /// Floor below which detail is never reduced.
    pub min: u32,
    /// Amount subtracted from detail per reduction round.
    pub step: u32,
}

impl ModeSchedule {
    /// Upper bound on refinement iterations for this schedule.
    pub fn max_rounds(&self) -> u32 {
        (self.start - self.min).div_ceil(self.step) + 1
    }
}

impl Mode {
    /// Every mode, in registry order.
    pub const ALL: [Mode; 14] = [
        Mode::Butterfly,
        Mode::LissajousWeb,
        Mode::PhyllotaxisBloom,
        Mode::SpiralLattice,
        Mode::RibbonBraid,
        Mode::HelicalSpring,
        Mode::FractalFlake,
        Mode::OrbitConstellation,
        Mode::StrangeAttractor,
        Mode::VoronoiSwarm,
        Mode::PlanarHarmonic,
        Mode::MagneticField,
        Mode::FoldedRibbon,
        Mode::ParticleDrift,
    ];

    /// The intricate modes a collection cycles through once its butterfly
    /// quota is spent (every mode except `Butterfly`).
    pub const INTRICATE: [Mode; 13] = [
        Mode::LissajousWeb,
        Mode::PhyllotaxisBloom,
        Mode::SpiralLattice,
        Mode::RibbonBraid,
        Mode::HelicalSpring,
        Mode::FractalFlake,
        Mode::OrbitConstellation,
        Mode::StrangeAttractor,
        Mode::VoronoiSwarm,
        Mode::PlanarHarmonic,
        Mode::MagneticField,
        Mode::FoldedRibbon,
        Mode::ParticleDrift,
    ];

    /// Deterministic round-robin pick over the intricate modes.
    pub fn intricate_by_ordinal(ordinal: usize) -> Mode {
        Self::INTRICATE[ordinal % Self::INTRICATE.len()]
    }

    /// Wire name of this mode, as requests and diagnostics spell it.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Butterfly => "butterfly",
            Mode::LissajousWeb => "lissajousWeb",
            Mode::PhyllotaxisBloom => "phyllotaxisBloom",
            Mode::SpiralLattice => "spiralLattice",
            Mode::RibbonBraid => "ribbonBraid",
            Mode::HelicalSpring => "helicalSpring",
            Mode::FractalFlake => "fractalFlake",
            Mode::OrbitConstellation => "orbitConstellation",
            Mode::StrangeAttractor => "strangeAttractor",
            Mode::VoronoiSwarm => "voronoiSwarm",
            Mode::PlanarHarmonic => "planarHarmonic",
            Mode::MagneticField => "magneticField",
            Mode::FoldedRibbon => "foldedRibbon",
            Mode::ParticleDrift => "particleDrift",
        }
    }

    /// Look up a mode by wire name. `None` means the request is malformed;
    /// callers must not substitute a fallback mode.
    pub fn from_name(name: &str) -> Option<Mode> {
        Self::ALL.iter().copied().find(|m| m.name() == name)
    }

    pub fn schedule(&self) -> ModeSchedule {
        match self {
            Mode::Butterfly => ModeSchedule { start: 220, min: 70, step: 18 },
            Mode::LissajousWeb => ModeSchedule { start: 200, min: 80, step: 16 },
            Mode::PhyllotaxisBloom => ModeSchedule { start: 190, min: 90, step: 16 },
            Mode::SpiralLattice => ModeSchedule { start: 200, min: 110, step: 16 },
            Mode::RibbonBraid => ModeSchedule { start: 190, min: 90, step: 16 },
            Mode::HelicalSpring => ModeSchedule { start: 200, min: 110, step: 16 },
            Mode::FractalFlake => ModeSchedule { start: 180, min: 90, step: 16 },
            Mode::OrbitConstellation => ModeSchedule { start: 190, min: 100, step: 16 },
            Mode::StrangeAttractor => ModeSchedule { start: 200, min: 90, step: 16 },
            Mode::VoronoiSwarm => ModeSchedule { start: 200, min: 100, step: 16 },
            Mode::PlanarHarmonic => ModeSchedule { start: 190, min: 90, step: 16 },
            Mode::MagneticField => ModeSchedule { start: 200, min: 100, step: 16 },
            Mode::FoldedRibbon => ModeSchedule { start: 190, min: 90, step: 16 },
            Mode::ParticleDrift => ModeSchedule { start: 190, min: 90, step: 16 },
        }
    }

    /// Build this mode's polylines at the given detail level. Pure in the
    /// stream: the same stream state and detail always produce the same
    /// polylines.
    pub fn build(&self, rng: &mut Rng, detail: u32) -> Vec<Polyline> {
        match self {
            Mode::Butterfly => builders::butterfly(rng, detail),
            Mode::LissajousWeb => builders::lissajous_web(rng, detail),
            Mode::PhyllotaxisBloom => builders::phyllotaxis_bloom(rng, detail),
            Mode::SpiralLattice => builders::spiral_lattice(rng, detail),
            Mode::RibbonBraid => builders::ribbon_braid(rng, detail),
            Mode::HelicalSpring => builders::helical_spring(rng, detail),
            Mode::FractalFlake => builders::fractal_flake(rng, detail),
            Mode::OrbitConstellation => builders::orbit_constellation(rng, detail),
            Mode::StrangeAttractor => builders::strange_attractor(rng, detail),
            Mode::VoronoiSwarm => builders::voronoi_swarm(rng, detail),
            Mode::PlanarHarmonic => builders::planar_harmonic(rng, detail),
            Mode::MagneticField => builders::magnetic_field(rng, detail),
            Mode::FoldedRibbon => builders::folded_ribbon(rng, detail),
            Mode::ParticleDrift => builders::particle_drift(rng, detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::seed::Seed;

    #[test]
    fn test_name_roundtrip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(Mode::from_name("doesNotExist"), None);
        assert_eq!(Mode::from_name("Butterfly"), None); // wire names are camelCase
    }

    #[test]
    fn test_schedules_are_walkable() {
        for mode in Mode::ALL {
            let s = mode.schedule();
            assert!(s.min < s.start, "{}", mode.name());
            assert!(s.step > 0, "{}", mode.name());
            assert!(s.max_rounds() >= 2, "{}", mode.name());
        }
    }

    #[test]
    fn test_intricate_excludes_butterfly() {
        assert!(!Mode::INTRICATE.contains(&Mode::Butterfly));
        assert_eq!(Mode::INTRICATE.len(), Mode::ALL.len() - 1);
    }

    #[test]
    fn test_intricate_by_ordinal_wraps() {
        assert_eq!(Mode::intricate_by_ordinal(0), Mode::LissajousWeb);
        assert_eq!(
            Mode::intricate_by_ordinal(13),
            Mode::intricate_by_ordinal(0)
        );
    }

    #[test]
    fn test_every_mode_builds_valid_polylines_across_schedule() {
        for mode in Mode::ALL {
            let s = mode.schedule();
            let mut detail = s.start;
            loop {
                let seed = Seed::derive(&["walk", mode.name()]).child("geometry");
                let mut rng = Rng::from_seed(&seed);
                let lines = mode.build(&mut rng, detail);
                assert!(!lines.is_empty(), "{} produced no polylines", mode.name());
                for line in &lines {
                    assert!(
                        !line.is_degenerate(),
                        "{} produced degenerate polyline {} at detail {}",
                        mode.name(),
                        line.id,
                        detail
                    );
                    assert!((12..=22).contains(&line.segments), "{}", line.id);
                }
                if detail == s.min {
                    break;
                }
                detail = detail.saturating_sub(s.step).max(s.min);
            }
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        for mode in [Mode::Butterfly, Mode::StrangeAttractor, Mode::VoronoiSwarm] {
            let seed = Seed::derive(&["det", mode.name()]);
            let a = mode.build(&mut Rng::from_seed(&seed), 150);
            let b = mode.build(&mut Rng::from_seed(&seed), 150);
            assert_eq!(a, b);
        }
    }
}
