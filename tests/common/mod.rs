#![allow(dead_code)]
use aurora_core::{
    Appearance, CursorFrame, EntityFrame, EntityId, EntityKind, HostSignals, Surface, SurfaceError,
};
use std::collections::BTreeSet;

/// Surface that records every call so tests can assert on node lifetimes.
#[derive(Debug, Default)]
pub struct MockSurface {
    pub missing: Vec<EntityKind>,
    pub live: BTreeSet<u64>,
    pub created: Vec<(EntityId, EntityKind)>,
    pub appearances: Vec<Appearance>,
    pub removed: Vec<EntityId>,
    pub updates: usize,
    pub finished: Vec<EntityId>,
    pub paused: bool,
    pub cursor: bool,
    pub cursor_frames: Vec<CursorFrame>,
    pub cursor_hidden: bool,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            cursor: true,
            ..Self::default()
        }
    }

    pub fn without(kinds: &[EntityKind]) -> Self {
        Self {
            missing: kinds.to_vec(),
            ..Self::new()
        }
    }

    pub fn live_of(&self, kind: EntityKind) -> usize {
        self.created
            .iter()
            .filter(|(id, k)| *k == kind && self.live.contains(&id.raw()))
            .count()
    }

    /// Simulate the host's "animation finished" callback.
    pub fn finish(&mut self, id: EntityId) {
        self.finished.push(id);
    }
}

impl Surface for MockSurface {
    type Node = EntityId;

    fn has_mount(&self, kind: EntityKind) -> bool {
        !self.missing.contains(&kind)
    }

    fn create(
        &mut self,
        id: EntityId,
        kind: EntityKind,
        a: &Appearance,
    ) -> Result<EntityId, SurfaceError> {
        if self.missing.contains(&kind) {
            return Err(SurfaceError::MissingMount(kind.label()));
        }
        assert!(self.live.insert(id.raw()), "{} created twice", id);
        self.created.push((id, kind));
        self.appearances.push(a.clone());
        Ok(id)
    }

    fn update(&mut self, node: &EntityId, _frame: &EntityFrame) {
        assert!(self.live.contains(&node.raw()), "update on released {}", node);
        self.updates += 1;
    }

    fn remove(&mut self, node: EntityId) {
        assert!(self.live.remove(&node.raw()), "{} removed twice", node);
        self.removed.push(node);
    }

    fn take_finished(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.finished)
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn has_cursor(&self) -> bool {
        self.cursor
    }

    fn place_cursor(&mut self, frame: &CursorFrame) {
        self.cursor_hidden = false;
        self.cursor_frames.push(*frame);
    }

    fn hide_cursor(&mut self) {
        self.cursor_hidden = true;
    }
}

pub fn desktop() -> HostSignals {
    HostSignals {
        viewport_width: 1280.0,
        device_memory_gb: Some(8.0),
        logical_cores: Some(8),
        coarse_pointer: false,
        reduced_motion: false,
    }
}

pub fn low_end_phone() -> HostSignals {
    HostSignals {
        viewport_width: 400.0,
        device_memory_gb: Some(2.0),
        logical_cores: Some(2),
        coarse_pointer: true,
        reduced_motion: false,
    }
}

pub fn tablet() -> HostSignals {
    HostSignals {
        viewport_width: 1024.0,
        device_memory_gb: Some(4.0),
        logical_cores: Some(6),
        coarse_pointer: true,
        reduced_motion: false,
    }
}

/// Drive `frame` at a fixed host rate from `start` for `duration` ms. Returns the next timestamp.
pub fn run<F: FnMut(f64)>(start: f64, duration: f64, interval: f64, mut frame: F) -> f64 {
    let mut t = start;
    while t < start + duration {
        frame(t);
        t += interval;
    }
    t
}
