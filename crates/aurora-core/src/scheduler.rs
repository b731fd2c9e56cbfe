//! The single cooperative frame loop.
//!
//! Each host frame either does nothing (paused, or throttled for the tier) or
//! runs one turn: cursor tick, entity advance and completion, generator ticks in
//! fixed [`EntityKind::ALL`] order, then a pose update for every live node.

use crate::constants::MAX_FRAME_DELTA_MS;
use crate::cursor::CursorFollower;
use crate::entity::EntityKind;
use crate::generators::EffectGenerator;
use crate::registry::Registry;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Running,
    Paused,
}

/// Timestamp of the executed frame and the active time since the previous one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    pub now_ms: f64,
    pub dt_ms: f64,
}

/// What one call to [`Scheduler::frame`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub executed: bool,
    pub spawned: usize,
    pub completed: usize,
}

pub struct Scheduler<S: Surface> {
    pub(crate) state: SchedulerState,
    pub(crate) surface: S,
    pub(crate) registry: Registry<S::Node>,
    pub(crate) generators: Vec<EffectGenerator>,
    pub(crate) cursor: Option<CursorFollower>,
    min_interval_ms: f64,
    last_executed_ms: Option<f64>,
    frames_executed: u64,
}

impl<S: Surface> Scheduler<S> {
    pub fn new(surface: S, min_interval_ms: f64) -> Self {
        Self {
            state: SchedulerState::Running,
            surface,
            registry: Registry::new(),
            generators: Vec::with_capacity(EntityKind::COUNT),
            cursor: None,
            min_interval_ms,
            last_executed_ms: None,
            frames_executed: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == SchedulerState::Paused
    }

    pub fn min_interval_ms(&self) -> f64 {
        self.min_interval_ms
    }

    pub fn set_min_interval_ms(&mut self, ms: f64) {
        self.min_interval_ms = ms.max(0.0);
    }

    pub fn frames_executed(&self) -> u64 {
        self.frames_executed
    }

    pub fn registry(&self) -> &Registry<S::Node> {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn cursor(&self) -> Option<&CursorFollower> {
        self.cursor.as_ref()
    }

    pub fn cursor_mut(&mut self) -> Option<&mut CursorFollower> {
        self.cursor.as_mut()
    }

    /// Active generator kinds in tick order.
    pub fn active_kinds(&self) -> Vec<EntityKind> {
        self.generators.iter().map(|g| g.kind()).collect()
    }

    pub fn generator(&self, kind: EntityKind) -> Option<&EffectGenerator> {
        self.generators.iter().find(|g| g.kind() == kind)
    }

    /// Add a generator, keeping the fixed tick order. Replaces one of the same kind.
    pub fn install(&mut self, generator: EffectGenerator) {
        let kind = generator.kind();
        self.generators.retain(|g| g.kind() != kind);
        let at = self
            .generators
            .iter()
            .position(|g| g.kind().index() > kind.index())
            .unwrap_or(self.generators.len());
        self.generators.insert(at, generator);
    }

    pub fn pause(&mut self) {
        if self.state == SchedulerState::Paused {
            return;
        }
        self.state = SchedulerState::Paused;
        self.surface.set_paused(true);
        log::debug!("[scheduler] paused after {} frames", self.frames_executed);
    }

    pub fn resume(&mut self) {
        if self.state == SchedulerState::Running {
            return;
        }
        self.state = SchedulerState::Running;
        // the paused span is not active time
        self.last_executed_ms = None;
        self.surface.set_paused(false);
        log::debug!("[scheduler] resumed");
    }

    /// Release finite entities whose remaining lifetime is within `paused_for_ms`.
    pub fn drop_stale(&mut self, paused_for_ms: f64) -> usize {
        let stale = self.registry.stale_after(paused_for_ms);
        self.registry.release_many(stale, &mut self.surface)
    }

    /// Run one host frame.
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        if self.state == SchedulerState::Paused {
            return FrameReport::default();
        }
        let dt_ms = match self.last_executed_ms {
            Some(last) => {
                let elapsed = now_ms - last;
                if !(elapsed >= self.min_interval_ms) {
                    return FrameReport::default();
                }
                elapsed.min(MAX_FRAME_DELTA_MS)
            }
            None => 0.0,
        };
        self.last_executed_ms = Some(now_ms);
        self.frames_executed += 1;
        let clock = FrameClock { now_ms, dt_ms };

        if let Some(cursor) = self.cursor.as_mut() {
            if let Some(pose) = cursor.tick() {
                self.surface.place_cursor(&pose);
            }
        }

        let finished = self.registry.advance(dt_ms);
        let mut completed = self.registry.release_many(finished, &mut self.surface);
        let host_finished = self.surface.take_finished();
        completed += self.registry.release_many(host_finished, &mut self.surface);

        let mut spawned = 0;
        for generator in self.generators.iter_mut() {
            spawned += generator.tick(clock, &mut self.registry, &mut self.surface);
        }

        for (node, kind, pose) in self.registry.poses() {
            if self.surface.wants_updates(kind) {
                self.surface.update(node, &pose);
            }
        }

        FrameReport {
            executed: true,
            spawned,
            completed,
        }
    }
}
