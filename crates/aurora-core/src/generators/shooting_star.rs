use super::Effect;
use crate::config::GeneratorConfig;
use crate::entity::{Appearance, EntityKind, Lifetime};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Streaks entering from the left edge and crossing downward at a shallow angle.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShootingStarEffect;

impl Effect for ShootingStarEffect {
    fn kind(&self) -> EntityKind {
        EntityKind::ShootingStar
    }

    fn sample(&self, config: &GeneratorConfig, rng: &mut StdRng) -> Appearance {
        let angle_deg = config.angle_deg.sample(rng) as f32;
        let distance = config.travel_px.sample(rng) as f32;
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Appearance {
            origin: Vec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(20.0..80.0)),
            size_px: config.size_px.sample(rng) as f32,
            opacity: config.opacity.sample(rng) as f32,
            angle_deg,
            travel: Vec2::new(cos, sin) * distance,
            phase_ms: 0.0,
            tint: "#ffffff",
            lifetime: Lifetime::Finite {
                duration_ms: config.duration_ms.sample(rng),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiler::CapabilityTier;
    use rand::SeedableRng;

    #[test]
    fn travel_follows_the_drawn_angle() {
        let cfg =
            GeneratorConfig::for_tier(EntityKind::ShootingStar, CapabilityTier::Full).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let a = ShootingStarEffect.sample(&cfg, &mut rng);
            let heading = a.travel.y.atan2(a.travel.x).to_degrees();
            assert!((heading - a.angle_deg).abs() < 1e-3);
            let len = a.travel.length() as f64;
            assert!(len >= cfg.travel_px.min - 1e-2 && len <= cfg.travel_px.max + 1e-2);
            assert!(a.travel.x > 0.0 && a.travel.y > 0.0);
        }
    }
}
