use super::{random_origin, Effect};
use crate::config::GeneratorConfig;
use crate::entity::{Appearance, EntityKind, Lifetime};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

const PHASE_SPREAD_MS: f64 = 10_000.0;

/// Slowly drifting motes on a long loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebrisEffect;

impl Effect for DebrisEffect {
    fn kind(&self) -> EntityKind {
        EntityKind::Debris
    }

    fn sample(&self, config: &GeneratorConfig, rng: &mut StdRng) -> Appearance {
        let heading = (config.angle_deg.sample(rng) as f32).to_radians();
        let drift = config.travel_px.sample(rng) as f32;
        Appearance {
            origin: random_origin(rng),
            size_px: config.size_px.sample(rng) as f32,
            opacity: config.opacity.sample(rng) as f32,
            angle_deg: 0.0,
            travel: Vec2::new(heading.cos(), heading.sin()) * drift,
            phase_ms: rng.gen_range(0.0..PHASE_SPREAD_MS),
            tint: "#94a3b8",
            lifetime: Lifetime::Looping {
                period_ms: config.duration_ms.sample(rng),
            },
        }
    }
}
