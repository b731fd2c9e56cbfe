use super::Effect;
use crate::config::GeneratorConfig;
use crate::entity::{Appearance, EntityKind, Lifetime};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Vertical falling streaks ("starfall"). They fall twice their drawn length.
#[derive(Debug, Default, Clone, Copy)]
pub struct StreakEffect;

impl Effect for StreakEffect {
    fn kind(&self) -> EntityKind {
        EntityKind::Streak
    }

    fn sample(&self, config: &GeneratorConfig, rng: &mut StdRng) -> Appearance {
        let length = config.travel_px.sample(rng) as f32;
        Appearance {
            origin: Vec2::new(rng.gen_range(0.0..100.0), 0.0),
            size_px: config.size_px.sample(rng) as f32,
            opacity: config.opacity.sample(rng) as f32,
            angle_deg: 0.0,
            travel: Vec2::new(0.0, length * 2.0),
            phase_ms: 0.0,
            tint: "#ffffff",
            lifetime: Lifetime::Finite {
                duration_ms: config.duration_ms.sample(rng),
            },
        }
    }
}
