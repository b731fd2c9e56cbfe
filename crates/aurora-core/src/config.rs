//! Per-tier generator parameters and session options.

use crate::constants::*;
use crate::entity::EntityKind;
use crate::profiler::CapabilityTier;
use rand::Rng;

/// Closed numeric range sampled uniformly. A degenerate span always yields `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// `center * (1 ± jitter)`.
    pub fn around(center: f64, jitter: f64) -> Self {
        Self {
            min: center * (1.0 - jitter),
            max: center * (1.0 + jitter),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A weighted visual layer (size / base opacity / tint) for layered effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub weight: u32,
    pub size_px: f32,
    pub opacity: f32,
    pub tint: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpawnMode {
    /// Seed the whole population on the first executed frame, then never spawn again.
    Once,
    /// Spawn a batch whenever a freshly drawn interval elapses.
    Continuous {
        interval_ms: Span,
        batch_min: u32,
        batch_max: u32,
        start_delay_ms: f64,
    },
}

/// Read-only parameters of one generator at one tier.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub ceiling: usize,
    pub mode: SpawnMode,
    /// Lifetime for finite kinds, loop period for looping kinds.
    pub duration_ms: Span,
    pub size_px: Span,
    pub opacity: Span,
    pub travel_px: Span,
    pub angle_deg: Span,
    pub layers: &'static [Layer],
}

const STAR_LAYERS_FULL: &[Layer] = &[
    Layer {
        weight: 300,
        size_px: 1.0,
        opacity: 0.8,
        tint: "#ffffff",
    },
    Layer {
        weight: 200,
        size_px: 2.0,
        opacity: 0.6,
        tint: "#e2e8f0",
    },
    Layer {
        weight: 150,
        size_px: 3.0,
        opacity: 0.4,
        tint: "#94a3b8",
    },
    Layer {
        weight: 100,
        size_px: 4.0,
        opacity: 0.3,
        tint: "#6366f1",
    },
];

const STAR_LAYERS_LIGHT: &[Layer] = &[
    Layer {
        weight: 2,
        size_px: 1.0,
        opacity: 0.8,
        tint: "#ffffff",
    },
    Layer {
        weight: 1,
        size_px: 2.0,
        opacity: 0.6,
        tint: "#e2e8f0",
    },
];

fn continuous(interval_ms: f64, batch_min: u32, batch_max: u32, start_delay_ms: f64) -> SpawnMode {
    SpawnMode::Continuous {
        interval_ms: Span::around(interval_ms, INTERVAL_JITTER),
        batch_min,
        batch_max,
        start_delay_ms,
    }
}

impl GeneratorConfig {
    pub fn is_spawn_once(&self) -> bool {
        matches!(self.mode, SpawnMode::Once)
    }

    /// Parameters for `kind` at `tier`, or `None` when the tier disables the kind.
    pub fn for_tier(kind: EntityKind, tier: CapabilityTier) -> Option<Self> {
        use CapabilityTier::*;
        use EntityKind::*;
        let config = match (kind, tier) {
            (Star, Full) => Self {
                ceiling: 750,
                mode: SpawnMode::Once,
                duration_ms: Span::new(5_000.0, 15_000.0),
                size_px: Span::new(1.0, 4.0),
                opacity: Span::new(0.0, 0.5),
                travel_px: Span::fixed(0.0),
                angle_deg: Span::fixed(0.0),
                layers: STAR_LAYERS_FULL,
            },
            (Star, Standard) => Self {
                ceiling: 225,
                duration_ms: Span::new(4_000.0, 12_000.0),
                layers: STAR_LAYERS_LIGHT,
                ..Self::for_tier(Star, Full)?
            },
            (Star, Minimal) => Self {
                ceiling: 120,
                duration_ms: Span::fixed(3_000.0),
                opacity: Span::new(0.0, 0.2),
                layers: STAR_LAYERS_LIGHT,
                ..Self::for_tier(Star, Full)?
            },
            (Streak, Full) => Self {
                ceiling: 12,
                mode: continuous(800.0, 1, 2, 1_000.0),
                duration_ms: Span::new(1_000.0, 3_000.0),
                size_px: Span::new(1.0, 2.0),
                opacity: Span::new(0.2, 0.6),
                travel_px: Span::new(100.0, 250.0),
                angle_deg: Span::fixed(0.0),
                layers: &[],
            },
            (Streak, Standard) => Self {
                ceiling: 6,
                mode: continuous(1_500.0, 1, 1, 1_000.0),
                duration_ms: Span::new(1_000.0, 2_500.0),
                travel_px: Span::new(50.0, 150.0),
                ..Self::for_tier(Streak, Full)?
            },
            (ShootingStar, Full) => Self {
                ceiling: 4,
                mode: continuous(3_000.0, 1, 1, 2_000.0),
                duration_ms: Span::new(1_500.0, 4_000.0),
                size_px: Span::new(1.0, 2.0),
                opacity: Span::new(0.2, 0.6),
                travel_px: Span::new(300.0, 700.0),
                angle_deg: Span::new(15.0, 40.0),
                layers: &[],
            },
            (ShootingStar, Standard) => Self {
                ceiling: 2,
                mode: continuous(4_000.0, 1, 1, 2_000.0),
                duration_ms: Span::new(1_500.0, 3_500.0),
                travel_px: Span::new(200.0, 500.0),
                angle_deg: Span::new(15.0, 30.0),
                ..Self::for_tier(ShootingStar, Full)?
            },
            (Meteor, Full) => Self {
                ceiling: 6,
                mode: continuous(5_000.0, 1, 2, 3_000.0),
                duration_ms: Span::new(3_000.0, 7_000.0),
                size_px: Span::new(2.0, 4.0),
                opacity: Span::new(0.3, 0.6),
                travel_px: Span::new(400.0, 900.0),
                angle_deg: Span::new(10.0, 25.0),
                layers: &[],
            },
            (Meteor, Standard) => Self {
                ceiling: 2,
                mode: continuous(8_000.0, 1, 1, 3_000.0),
                duration_ms: Span::new(2_500.0, 6_000.0),
                travel_px: Span::new(300.0, 600.0),
                angle_deg: Span::new(10.0, 20.0),
                ..Self::for_tier(Meteor, Full)?
            },
            (Debris, Full) => Self {
                ceiling: 20,
                mode: SpawnMode::Once,
                duration_ms: Span::new(30_000.0, 70_000.0),
                size_px: Span::new(1.0, 4.0),
                opacity: Span::new(0.1, 0.3),
                travel_px: Span::new(20.0, 60.0),
                angle_deg: Span::new(0.0, 360.0),
                layers: &[],
            },
            (Debris, Standard) => Self {
                ceiling: 10,
                ..Self::for_tier(Debris, Full)?
            },
            (Debris, Minimal) => Self {
                ceiling: 8,
                travel_px: Span::new(10.0, 30.0),
                ..Self::for_tier(Debris, Full)?
            },
            (Streak | ShootingStar | Meteor, Minimal) => return None,
        };
        Some(config)
    }
}

/// Session-wide options. Every field has a sensible default.
#[derive(Clone, Debug, PartialEq)]
pub struct AuroraOptions {
    /// Base seed; each generator derives an independent stream from it.
    pub seed: u64,
    pub mobile_breakpoint_px: f64,
    pub battery_low_threshold: f64,
    pub low_fps_threshold: f64,
    /// Demote the tier on sustained low frame rate.
    pub adaptive_fps: bool,
}

impl Default for AuroraOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            battery_low_threshold: BATTERY_LOW_THRESHOLD,
            low_fps_threshold: LOW_FPS_THRESHOLD,
            adaptive_fps: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn degenerate_span_yields_min() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Span::fixed(3.0).sample(&mut rng), 3.0);
        assert_eq!(Span::new(5.0, 1.0).sample(&mut rng), 5.0);
    }

    #[test]
    fn samples_stay_inside_span() {
        let mut rng = StdRng::seed_from_u64(7);
        let span = Span::around(800.0, INTERVAL_JITTER);
        for _ in 0..1000 {
            assert!(span.contains(span.sample(&mut rng)));
        }
    }

    #[test]
    fn minimal_keeps_only_two_spawn_once_kinds() {
        let enabled: Vec<EntityKind> = EntityKind::ALL
            .into_iter()
            .filter(|k| GeneratorConfig::for_tier(*k, CapabilityTier::Minimal).is_some())
            .collect();
        assert_eq!(enabled, vec![EntityKind::Star, EntityKind::Debris]);
        for kind in enabled {
            let cfg = GeneratorConfig::for_tier(kind, CapabilityTier::Minimal).unwrap();
            assert!(cfg.is_spawn_once(), "{} should be spawn-once", kind.label());
        }
    }

    #[test]
    fn ceilings_shrink_with_tier() {
        for kind in EntityKind::ALL {
            let full = GeneratorConfig::for_tier(kind, CapabilityTier::Full).map(|c| c.ceiling);
            let std = GeneratorConfig::for_tier(kind, CapabilityTier::Standard).map(|c| c.ceiling);
            let min = GeneratorConfig::for_tier(kind, CapabilityTier::Minimal).map(|c| c.ceiling);
            assert!(full.unwrap_or(0) >= std.unwrap_or(0));
            assert!(std.unwrap_or(0) >= min.unwrap_or(0));
        }
    }
}
