//! Bookkeeping for every live entity and its visual node.

use crate::entity::{AnimatedEntity, EntityFrame, EntityId, EntityKind};
use crate::surface::Surface;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Ids completed during one advance step.
pub type Completed = SmallVec<[EntityId; 8]>;

struct Slot<N> {
    entity: AnimatedEntity,
    node: Option<N>,
}

/// Maps live entity ids to their entity state and cleanup handle.
///
/// Release is idempotent: the timeline, a host "finished" callback and a forced
/// teardown may all try to release the same id.
pub struct Registry<N> {
    slots: FnvHashMap<EntityId, Slot<N>>,
    counts: [usize; EntityKind::COUNT],
    next_id: u64,
    released_total: u64,
}

impl<N> Default for Registry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Registry<N> {
    pub fn new() -> Self {
        Self {
            slots: FnvHashMap::default(),
            counts: [0; EntityKind::COUNT],
            next_id: 1,
            released_total: 0,
        }
    }

    /// Reserve the id for an entity about to be created on the surface.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn register(&mut self, entity: AnimatedEntity, node: N) -> EntityId {
        let id = entity.id;
        let kind = entity.kind;
        let previous = self.slots.insert(
            id,
            Slot {
                entity,
                node: Some(node),
            },
        );
        if previous.is_none() {
            self.counts[kind.index()] += 1;
        } else {
            log::warn!("[registry] {} registered twice; keeping the newer entity", id);
        }
        id
    }

    /// Remove the node from the surface, then forget the id. Returns `false` when
    /// the id was already released.
    pub fn release<S>(&mut self, id: EntityId, surface: &mut S) -> bool
    where
        S: Surface<Node = N>,
    {
        let Some(slot) = self.slots.get_mut(&id) else {
            return false;
        };
        if let Some(node) = slot.node.take() {
            surface.remove(node);
        }
        if let Some(slot) = self.slots.remove(&id) {
            self.counts[slot.entity.kind.index()] -= 1;
            self.released_total += 1;
        }
        true
    }

    /// Release every listed id, returning how many were actually live.
    pub fn release_many<S, I>(&mut self, ids: I, surface: &mut S) -> usize
    where
        S: Surface<Node = N>,
        I: IntoIterator<Item = EntityId>,
    {
        ids.into_iter()
            .filter(|id| self.release(*id, surface))
            .count()
    }

    pub fn release_all<S>(&mut self, surface: &mut S) -> usize
    where
        S: Surface<Node = N>,
    {
        let ids = self.all_active();
        self.release_many(ids, surface)
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&AnimatedEntity> {
        self.slots.get(&id).map(|s| &s.entity)
    }

    #[inline]
    pub fn count(&self, kind: EntityKind) -> usize {
        self.counts[kind.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Lifetime count of successful releases.
    pub fn released_total(&self) -> u64 {
        self.released_total
    }

    /// Snapshot of every live id, oldest first. Safe to release while iterating.
    pub fn all_active(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.slots.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Snapshot of the live ids of one kind, oldest first.
    pub fn active_of(&self, kind: EntityKind) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .slots
            .iter()
            .filter(|(_, s)| s.entity.kind == kind)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Advance every entity by `dt_ms` of active time and report the ones that
    /// reached the end of a finite lifetime.
    pub fn advance(&mut self, dt_ms: f64) -> Completed {
        let mut done = Completed::new();
        for (id, slot) in self.slots.iter_mut() {
            slot.entity.advance(dt_ms);
            if slot.entity.is_finished() {
                done.push(*id);
            }
        }
        done.sort_unstable();
        done
    }

    /// Finite entities whose remaining lifetime would have run out within `pause_ms`.
    pub fn stale_after(&self, pause_ms: f64) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .slots
            .iter()
            .filter(|(_, s)| s.entity.remaining_ms().is_some_and(|r| r <= pause_ms))
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Current pose of every live entity alongside its node.
    pub fn poses(&self) -> impl Iterator<Item = (&N, EntityKind, EntityFrame)> + '_ {
        self.slots.values().filter_map(|s| {
            s.node
                .as_ref()
                .map(|node| (node, s.entity.kind, s.entity.frame()))
        })
    }
}
