//! Transient visual objects and their per-frame pose.

use glam::Vec2;
use std::f32::consts::{PI, TAU};
use std::fmt;

/// Unique, monotonically increasing entity handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub(crate) u64);

impl EntityId {
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Rebuild a handle from a value previously obtained with [`EntityId::raw`],
    /// e.g. one stored on a DOM node for its "animation finished" callback.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// One generator kind per variant. `ALL` is the scheduler's fixed tick order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Star,
    Streak,
    ShootingStar,
    Meteor,
    Debris,
}

impl EntityKind {
    pub const COUNT: usize = 5;
    pub const ALL: [EntityKind; Self::COUNT] = [
        EntityKind::Star,
        EntityKind::Streak,
        EntityKind::ShootingStar,
        EntityKind::Meteor,
        EntityKind::Debris,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            EntityKind::Star => 0,
            EntityKind::Streak => 1,
            EntityKind::ShootingStar => 2,
            EntityKind::Meteor => 3,
            EntityKind::Debris => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Star => "star",
            EntityKind::Streak => "streak",
            EntityKind::ShootingStar => "shooting-star",
            EntityKind::Meteor => "meteor",
            EntityKind::Debris => "debris",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lifetime {
    /// Completes once `elapsed >= duration_ms`.
    Finite { duration_ms: f64 },
    /// Never completes on its own; progress counts periods.
    Looping { period_ms: f64 },
}

impl Lifetime {
    pub fn is_finite(&self) -> bool {
        matches!(self, Lifetime::Finite { .. })
    }
}

/// Spawn-time parameters drawn by a generator. Positions are in percent of the
/// viewport, travel in CSS pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Appearance {
    pub origin: Vec2,
    pub size_px: f32,
    pub opacity: f32,
    pub angle_deg: f32,
    pub travel: Vec2,
    /// Phase offset for looping entities so a seeded population does not pulse in sync.
    pub phase_ms: f64,
    pub tint: &'static str,
    pub lifetime: Lifetime,
}

/// Pose applied to an entity's visual node on an executed frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityFrame {
    pub progress: f64,
    pub offset: Vec2,
    pub opacity: f32,
    pub angle_deg: f32,
}

#[derive(Clone, Debug)]
pub struct AnimatedEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub spawned_at_ms: f64,
    /// Active (unpaused) time since spawn.
    pub elapsed_ms: f64,
    pub appearance: Appearance,
}

impl AnimatedEntity {
    pub fn new(id: EntityId, kind: EntityKind, now_ms: f64, appearance: Appearance) -> Self {
        Self {
            id,
            kind,
            spawned_at_ms: now_ms,
            elapsed_ms: 0.0,
            appearance,
        }
    }

    /// 0..=1 for finite entities, unbounded period count for looping ones.
    pub fn progress(&self) -> f64 {
        match self.appearance.lifetime {
            Lifetime::Finite { duration_ms } => {
                if duration_ms <= 0.0 {
                    1.0
                } else {
                    (self.elapsed_ms / duration_ms).clamp(0.0, 1.0)
                }
            }
            Lifetime::Looping { period_ms } => {
                if period_ms <= 0.0 {
                    0.0
                } else {
                    (self.elapsed_ms + self.appearance.phase_ms) / period_ms
                }
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        match self.appearance.lifetime {
            Lifetime::Finite { duration_ms } => self.elapsed_ms >= duration_ms,
            Lifetime::Looping { .. } => false,
        }
    }

    /// Remaining active lifetime; `None` for looping entities.
    pub fn remaining_ms(&self) -> Option<f64> {
        match self.appearance.lifetime {
            Lifetime::Finite { duration_ms } => Some((duration_ms - self.elapsed_ms).max(0.0)),
            Lifetime::Looping { .. } => None,
        }
    }

    #[inline]
    pub fn advance(&mut self, dt_ms: f64) {
        self.elapsed_ms += dt_ms.max(0.0);
    }

    pub fn frame(&self) -> EntityFrame {
        let progress = self.progress();
        let a = &self.appearance;
        let (offset, opacity) = match self.kind {
            EntityKind::Streak | EntityKind::ShootingStar | EntityKind::Meteor => {
                let t = progress as f32;
                (a.travel * ease_in_out_cubic(t), a.opacity * fade_envelope(t))
            }
            EntityKind::Star => {
                let phase = (progress.fract() as f32) * TAU;
                // twinkle between 30% and 100% of the base opacity
                (Vec2::ZERO, a.opacity * (0.65 + 0.35 * phase.cos()))
            }
            EntityKind::Debris => {
                let phase = (progress.fract() as f32) * TAU;
                (
                    Vec2::new(a.travel.x * phase.sin(), a.travel.y * (1.0 - phase.cos()) * 0.5),
                    a.opacity,
                )
            }
        };
        EntityFrame {
            progress,
            offset,
            opacity: opacity.clamp(0.0, 1.0),
            angle_deg: a.angle_deg,
        }
    }
}

#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Fade in, peak mid-flight, fade out.
#[inline]
pub fn fade_envelope(t: f32) -> f32 {
    (t.clamp(0.0, 1.0) * PI).sin()
}
