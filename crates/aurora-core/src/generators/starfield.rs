use super::{random_origin, Effect};
use crate::config::GeneratorConfig;
use crate::entity::{Appearance, EntityKind, Lifetime};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Twinkle phase spread across the seeded population.
const PHASE_SPREAD_MS: f64 = 5_000.0;

/// Static twinkling stars, drawn from weighted layers.
#[derive(Debug, Default, Clone, Copy)]
pub struct StarfieldEffect;

impl Effect for StarfieldEffect {
    fn kind(&self) -> EntityKind {
        EntityKind::Star
    }

    fn sample(&self, config: &GeneratorConfig, rng: &mut StdRng) -> Appearance {
        let (size_px, base_opacity, tint) = match pick_layer(config, rng) {
            Some(layer) => (layer.size_px, layer.opacity, layer.tint),
            None => (config.size_px.sample(rng) as f32, 0.5, "#ffffff"),
        };
        Appearance {
            origin: random_origin(rng),
            size_px,
            opacity: (base_opacity + config.opacity.sample(rng) as f32).min(1.0),
            angle_deg: 0.0,
            travel: Vec2::ZERO,
            phase_ms: rng.gen_range(0.0..PHASE_SPREAD_MS),
            tint,
            lifetime: Lifetime::Looping {
                period_ms: config.duration_ms.sample(rng),
            },
        }
    }
}

fn pick_layer<'a>(
    config: &'a GeneratorConfig,
    rng: &mut StdRng,
) -> Option<&'a crate::config::Layer> {
    let total: u32 = config.layers.iter().map(|l| l.weight).sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.gen_range(0..total);
    for layer in config.layers {
        if roll < layer.weight {
            return Some(layer);
        }
        roll -= layer.weight;
    }
    config.layers.last()
}
