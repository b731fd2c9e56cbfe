//! The host rendering primitive the core draws through.

use crate::cursor::CursorFrame;
use crate::entity::{Appearance, EntityFrame, EntityId, EntityKind};
use crate::error::SurfaceError;

/// Creates, poses and removes positioned visual nodes.
///
/// Implementations are driven exclusively from the scheduler's frame turn and
/// from discrete signal handlers, never concurrently.
pub trait Surface {
    type Node;

    /// Whether the mount point for this generator kind exists.
    fn has_mount(&self, kind: EntityKind) -> bool;

    fn create(
        &mut self,
        id: EntityId,
        kind: EntityKind,
        appearance: &Appearance,
    ) -> Result<Self::Node, SurfaceError>;

    /// Apply this frame's pose. Hosts that animate natively can ignore it.
    fn update(&mut self, _node: &Self::Node, _frame: &EntityFrame) {}

    /// Release the node. Called exactly once per created node.
    fn remove(&mut self, node: Self::Node);

    /// Whether `update` should be called for this kind each frame. Hosts that
    /// animate natively (CSS keyframes) return `false`.
    fn wants_updates(&self, _kind: EntityKind) -> bool {
        true
    }

    /// Ids whose host-side "animation finished" callback fired since the last call.
    fn take_finished(&mut self) -> Vec<EntityId> {
        Vec::new()
    }

    /// Freeze or thaw host-driven animation.
    fn set_paused(&mut self, _paused: bool) {}

    fn has_cursor(&self) -> bool {
        false
    }

    fn place_cursor(&mut self, _frame: &CursorFrame) {}

    fn hide_cursor(&mut self) {}
}
