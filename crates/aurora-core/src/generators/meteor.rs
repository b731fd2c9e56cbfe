use super::Effect;
use crate::config::GeneratorConfig;
use crate::entity::{Appearance, EntityKind, Lifetime};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Larger, slower bodies entering from the top and falling leftward.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeteorEffect;

impl Effect for MeteorEffect {
    fn kind(&self) -> EntityKind {
        EntityKind::Meteor
    }

    fn sample(&self, config: &GeneratorConfig, rng: &mut StdRng) -> Appearance {
        let descent_deg = config.angle_deg.sample(rng) as f32;
        let distance = config.travel_px.sample(rng) as f32;
        let (sin, cos) = descent_deg.to_radians().sin_cos();
        Appearance {
            origin: Vec2::new(rng.gen_range(20.0..120.0), 0.0),
            size_px: config.size_px.sample(rng) as f32,
            opacity: config.opacity.sample(rng) as f32,
            // tail points back along the direction of travel
            angle_deg: 180.0 - descent_deg,
            travel: Vec2::new(-cos, sin) * distance,
            phase_ms: 0.0,
            tint: "#fde68a",
            lifetime: Lifetime::Finite {
                duration_ms: config.duration_ms.sample(rng),
            },
        }
    }
}
