use aurora_core::{
    Appearance, CursorFrame, EntityFrame, EntityId, EntityKind, Surface, SurfaceError,
};

/// Per-kind counters.
#[derive(Clone, Copy, Debug, Default)]
pub struct KindStats {
    pub created: u64,
    pub removed: u64,
    pub live: usize,
    pub peak: usize,
}

/// Headless surface that only counts what the scheduler asks of it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub stats: [KindStats; EntityKind::COUNT],
    pub missing: Vec<EntityKind>,
    pub updates: u64,
    pub cursor_frames: u64,
    pub last_cursor: Option<CursorFrame>,
    pub paused: bool,
}

impl RecordingSurface {
    pub fn without(missing: Vec<EntityKind>) -> Self {
        Self {
            missing,
            ..Self::default()
        }
    }

    pub fn live_total(&self) -> usize {
        self.stats.iter().map(|s| s.live).sum()
    }
}

impl Surface for RecordingSurface {
    type Node = (EntityId, EntityKind);

    fn has_mount(&self, kind: EntityKind) -> bool {
        !self.missing.contains(&kind)
    }

    fn create(
        &mut self,
        id: EntityId,
        kind: EntityKind,
        _appearance: &Appearance,
    ) -> Result<Self::Node, SurfaceError> {
        if !self.has_mount(kind) {
            return Err(SurfaceError::MissingMount(kind.label()));
        }
        let s = &mut self.stats[kind.index()];
        s.created += 1;
        s.live += 1;
        s.peak = s.peak.max(s.live);
        Ok((id, kind))
    }

    fn update(&mut self, _node: &Self::Node, _frame: &EntityFrame) {
        self.updates += 1;
    }

    fn remove(&mut self, (_, kind): Self::Node) {
        let s = &mut self.stats[kind.index()];
        s.removed += 1;
        s.live -= 1;
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn has_cursor(&self) -> bool {
        true
    }

    fn place_cursor(&mut self, frame: &CursorFrame) {
        self.cursor_frames += 1;
        self.last_cursor = Some(*frame);
    }

    fn hide_cursor(&mut self) {
        self.last_cursor = None;
    }
}
