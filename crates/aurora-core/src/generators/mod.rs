//! Independent producers of transient entities, one per [`EntityKind`].
//!
//! Every kind shares the spawn discipline in [`EffectGenerator`]; only the way a
//! spawn's appearance is drawn differs, which is what [`Effect`] captures.
//! Generators never share mutable state with each other.

mod debris;
mod meteor;
mod shooting_star;
mod starfield;
mod streak;

pub use debris::DebrisEffect;
pub use meteor::MeteorEffect;
pub use shooting_star::ShootingStarEffect;
pub use starfield::StarfieldEffect;
pub use streak::StreakEffect;

use crate::config::{GeneratorConfig, SpawnMode};
use crate::entity::{AnimatedEntity, Appearance, EntityKind};
use crate::registry::Registry;
use crate::scheduler::FrameClock;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Draws the randomized appearance of one spawn.
pub trait Effect: fmt::Debug {
    fn kind(&self) -> EntityKind;
    fn sample(&self, config: &GeneratorConfig, rng: &mut StdRng) -> Appearance;
}

pub fn effect_for(kind: EntityKind) -> Box<dyn Effect> {
    match kind {
        EntityKind::Star => Box::new(StarfieldEffect),
        EntityKind::Streak => Box::new(StreakEffect),
        EntityKind::ShootingStar => Box::new(ShootingStarEffect),
        EntityKind::Meteor => Box::new(MeteorEffect),
        EntityKind::Debris => Box::new(DebrisEffect),
    }
}

pub struct EffectGenerator {
    effect: Box<dyn Effect>,
    config: GeneratorConfig,
    rng: StdRng,
    since_spawn_ms: f64,
    next_interval_ms: f64,
    seeded: bool,
    spawned_total: u64,
}

impl fmt::Debug for EffectGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectGenerator")
            .field("kind", &self.kind())
            .field("ceiling", &self.config.ceiling)
            .field("seeded", &self.seeded)
            .field("spawned_total", &self.spawned_total)
            .finish()
    }
}

impl EffectGenerator {
    pub fn new(kind: EntityKind, config: GeneratorConfig, seed: u64) -> Self {
        let mut generator = Self {
            effect: effect_for(kind),
            config,
            rng: StdRng::seed_from_u64(seed),
            since_spawn_ms: 0.0,
            next_interval_ms: 0.0,
            seeded: false,
            spawned_total: 0,
        };
        generator.reset_timer(true);
        generator
    }

    #[inline]
    pub fn kind(&self) -> EntityKind {
        self.effect.kind()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    /// Adopt new parameters. In-flight entities are left alone; spawn-once
    /// generators reseed on their next tick.
    pub fn configure(&mut self, config: GeneratorConfig) {
        let was_continuous = !self.config.is_spawn_once();
        self.config = config;
        self.seeded = false;
        // continuous -> continuous draws a fresh interval; anything else honours the start delay
        self.reset_timer(!was_continuous);
    }

    /// Run one frame: trim above the ceiling, then spawn if the interval elapsed.
    /// Returns the number of entities created.
    pub fn tick<S: Surface>(
        &mut self,
        clock: FrameClock,
        registry: &mut Registry<S::Node>,
        surface: &mut S,
    ) -> usize {
        let kind = self.kind();
        self.trim_to_ceiling(registry, surface);
        match self.config.mode {
            SpawnMode::Once => {
                if self.seeded {
                    return 0;
                }
                self.seeded = true;
                let room = self.config.ceiling.saturating_sub(registry.count(kind));
                let spawned = self.spawn(room, clock, registry, surface);
                log::debug!("[{}] seeded {} entities", kind.label(), spawned);
                spawned
            }
            SpawnMode::Continuous {
                batch_min,
                batch_max,
                ..
            } => {
                self.since_spawn_ms += clock.dt_ms;
                if self.since_spawn_ms < self.next_interval_ms {
                    return 0;
                }
                self.reset_timer(false);
                let wanted = if batch_max > batch_min {
                    self.rng.gen_range(batch_min..=batch_max)
                } else {
                    batch_min
                };
                let wanted = wanted as usize;
                let room = self.config.ceiling.saturating_sub(registry.count(kind));
                self.spawn(wanted.min(room), clock, registry, surface)
            }
        }
    }

    /// Force-complete every entity this generator owns.
    pub fn shutdown<S: Surface>(
        &mut self,
        registry: &mut Registry<S::Node>,
        surface: &mut S,
    ) -> usize {
        let ids = registry.active_of(self.kind());
        let released = registry.release_many(ids, surface);
        if released > 0 {
            log::debug!("[{}] shut down {} entities", self.kind().label(), released);
        }
        self.seeded = false;
        released
    }

    fn trim_to_ceiling<S: Surface>(&mut self, registry: &mut Registry<S::Node>, surface: &mut S) {
        let kind = self.kind();
        let excess = registry.count(kind).saturating_sub(self.config.ceiling);
        if excess == 0 {
            return;
        }
        let oldest: Vec<_> = registry.active_of(kind).into_iter().take(excess).collect();
        let released = registry.release_many(oldest, surface);
        log::debug!("[{}] trimmed {} entities above ceiling", kind.label(), released);
    }

    fn spawn<S: Surface>(
        &mut self,
        count: usize,
        clock: FrameClock,
        registry: &mut Registry<S::Node>,
        surface: &mut S,
    ) -> usize {
        let kind = self.kind();
        let mut spawned = 0;
        for _ in 0..count {
            let appearance = self.effect.sample(&self.config, &mut self.rng);
            let id = registry.allocate_id();
            match surface.create(id, kind, &appearance) {
                Ok(node) => {
                    let entity = AnimatedEntity::new(id, kind, clock.now_ms, appearance);
                    registry.register(entity, node);
                    spawned += 1;
                }
                Err(e) => log::debug!("[{}] spawn skipped: {}", kind.label(), e),
            }
        }
        self.spawned_total += spawned as u64;
        spawned
    }

    fn reset_timer(&mut self, initial: bool) {
        self.since_spawn_ms = 0.0;
        self.next_interval_ms = match self.config.mode {
            SpawnMode::Once => 0.0,
            SpawnMode::Continuous {
                start_delay_ms,
                interval_ms,
                ..
            } => {
                if initial && start_delay_ms > 0.0 {
                    start_delay_ms
                } else {
                    interval_ms.sample(&mut self.rng)
                }
            }
        };
    }
}

/// Uniform position across the viewport, in percent.
pub(crate) fn random_origin(rng: &mut StdRng) -> glam::Vec2 {
    glam::Vec2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0))
}
