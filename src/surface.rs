//! DOM rendering surface: one absolutely positioned `div` per entity.
//!
//! Motion is delegated to the page's CSS keyframes; the core only decides when
//! nodes exist. Finite animations report completion through `animationend`,
//! which races the core's own timeline and is resolved by idempotent release.

use crate::constants::{
    pointer_rotation_deg, CURSOR_ACCENT_COLOR, CURSOR_POINTER_COLOR, CURSOR_POINTER_ID,
    CURSOR_RING_COLOR, CURSOR_RING_ID, CURSOR_TRAIL_ID, ENTITY_ATTR, KEYFRAMES, MOUNT_IDS,
    NODE_CLASSES,
};
use crate::dom;
use crate::listeners::ListenerSet;
use aurora_core::{Appearance, CursorFrame, EntityId, EntityKind, Lifetime, Surface, SurfaceError};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// tail length of shooting stars and meteors per px of thickness
const TAIL_PER_PX: f32 = 50.0;

pub struct DomNode {
    id: EntityId,
    el: web::HtmlElement,
}

struct CursorNodes {
    pointer: web::HtmlElement,
    ring: web::HtmlElement,
    trail: web::HtmlElement,
}

pub struct DomSurface {
    document: web::Document,
    mounts: [Option<web::HtmlElement>; EntityKind::COUNT],
    cursor: Option<CursorNodes>,
    live: FnvHashMap<EntityId, web::HtmlElement>,
    finished: Rc<RefCell<Vec<EntityId>>>,
    listeners: ListenerSet,
    paused: bool,
}

impl DomSurface {
    pub fn new(document: web::Document) -> Self {
        let mounts = MOUNT_IDS.map(|id| dom::html_by_id(&document, id));
        for (id, mount) in MOUNT_IDS.iter().zip(mounts.iter()) {
            if mount.is_none() {
                log::warn!("[surface] #{} not found", id);
            }
        }
        let cursor = match (
            dom::html_by_id(&document, CURSOR_POINTER_ID),
            dom::html_by_id(&document, CURSOR_RING_ID),
            dom::html_by_id(&document, CURSOR_TRAIL_ID),
        ) {
            (Some(pointer), Some(ring), Some(trail)) => Some(CursorNodes { pointer, ring, trail }),
            _ => None,
        };
        let finished = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = ListenerSet::default();
        for mount in mounts.iter().flatten() {
            let queue = finished.clone();
            listeners.add(mount, "animationend", move |ev: web::Event| {
                if let Some(id) = entity_of(&ev) {
                    queue.borrow_mut().push(id);
                }
            });
        }
        Self {
            document,
            mounts,
            cursor,
            live: FnvHashMap::default(),
            finished,
            listeners,
            paused: false,
        }
    }

    /// Remove the completion listeners. Called once the core has torn down.
    pub fn detach(&mut self) {
        self.listeners.remove_all();
        self.finished.borrow_mut().clear();
    }

    fn build(
        &self,
        id: EntityId,
        kind: EntityKind,
        a: &Appearance,
    ) -> Result<web::HtmlElement, SurfaceError> {
        let failed = |e: wasm_bindgen::JsValue| SurfaceError::CreateFailed {
            kind: kind.label(),
            reason: format!("{:?}", e),
        };
        let el = self
            .document
            .create_element("div")
            .map_err(failed)?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| SurfaceError::CreateFailed {
                kind: kind.label(),
                reason: "not an HtmlElement".into(),
            })?;
        el.set_class_name(NODE_CLASSES[kind.index()]);
        el.set_attribute(ENTITY_ATTR, &id.raw().to_string()).map_err(failed)?;

        let keyframes = KEYFRAMES[kind.index()];
        let animation = match a.lifetime {
            Lifetime::Looping { period_ms } => format!(
                "{} {:.0}ms ease-in-out -{:.0}ms infinite",
                keyframes, period_ms, a.phase_ms
            ),
            Lifetime::Finite { duration_ms } => {
                format!("{} {:.0}ms linear forwards", keyframes, duration_ms)
            }
        };
        let left = format!("{:.2}%", a.origin.x);
        let top = format!("{:.2}%", a.origin.y);
        let size = format!("{:.1}px", a.size_px);
        let opacity = format!("{:.2}", a.opacity);
        let rotate = format!("rotate({:.1}deg)", a.angle_deg);
        let travel_x = format!("{:.1}px", a.travel.x);
        let travel_y = format!("{:.1}px", a.travel.y);
        let play_state = if self.paused { "paused" } else { "running" };
        dom::set_styles(
            &el,
            &[
                ("position", "absolute"),
                ("left", left.as_str()),
                ("top", top.as_str()),
                ("opacity", opacity.as_str()),
                ("transform", rotate.as_str()),
                ("--travel-x", travel_x.as_str()),
                ("--travel-y", travel_y.as_str()),
                ("animation", animation.as_str()),
                ("animation-play-state", play_state),
                ("pointer-events", "none"),
            ],
        );
        match kind {
            EntityKind::Star | EntityKind::Debris => {
                let glow = format!("0 0 {:.1}px {}", a.size_px * 2.0, a.tint);
                dom::set_styles(
                    &el,
                    &[
                        ("width", size.as_str()),
                        ("height", size.as_str()),
                        ("border-radius", "50%"),
                        ("background-color", a.tint),
                        ("box-shadow", glow.as_str()),
                    ],
                );
            }
            EntityKind::Streak => {
                let length = format!("{:.1}px", a.travel.length() / 2.0);
                let gradient = format!(
                    "linear-gradient(to bottom, transparent, {}, transparent)",
                    a.tint
                );
                dom::set_styles(
                    &el,
                    &[
                        ("width", size.as_str()),
                        ("height", length.as_str()),
                        ("background", gradient.as_str()),
                    ],
                );
            }
            EntityKind::ShootingStar | EntityKind::Meteor => {
                let tail = format!("{:.1}px", a.size_px * TAIL_PER_PX);
                let gradient =
                    format!("linear-gradient(90deg, transparent, {}, transparent)", a.tint);
                dom::set_styles(
                    &el,
                    &[
                        ("width", tail.as_str()),
                        ("height", size.as_str()),
                        ("background", gradient.as_str()),
                    ],
                );
            }
        }
        Ok(el)
    }
}

impl Surface for DomSurface {
    type Node = DomNode;

    fn has_mount(&self, kind: EntityKind) -> bool {
        self.mounts[kind.index()].is_some()
    }

    fn create(
        &mut self,
        id: EntityId,
        kind: EntityKind,
        appearance: &Appearance,
    ) -> Result<DomNode, SurfaceError> {
        let mount = self.mounts[kind.index()]
            .as_ref()
            .ok_or(SurfaceError::MissingMount(MOUNT_IDS[kind.index()]))?;
        let el = self.build(id, kind, appearance)?;
        mount.append_child(&el).map_err(|e| SurfaceError::CreateFailed {
            kind: kind.label(),
            reason: format!("{:?}", e),
        })?;
        self.live.insert(id, el.clone());
        Ok(DomNode { id, el })
    }

    fn remove(&mut self, node: DomNode) {
        self.live.remove(&node.id);
        node.el.remove();
    }

    fn wants_updates(&self, _kind: EntityKind) -> bool {
        false
    }

    fn take_finished(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut *self.finished.borrow_mut())
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        let state = if paused { "paused" } else { "running" };
        for el in self.live.values() {
            dom::set_style(el, "animation-play-state", state);
        }
    }

    fn has_cursor(&self) -> bool {
        self.cursor.is_some()
    }

    fn place_cursor(&mut self, frame: &CursorFrame) {
        let Some(c) = self.cursor.as_ref() else {
            return;
        };
        let style = frame.style;
        let px = |v: f32| format!("{:.1}px", v);
        let pointer_transform = format!(
            "translate(-50%, -50%) rotate({:.1}deg) scale({})",
            pointer_rotation_deg(frame.heading_deg),
            style.pointer_scale
        );
        let (pointer_x, pointer_y) = (px(frame.pointer.x), px(frame.pointer.y));
        let (near_x, near_y) = (px(frame.near.x), px(frame.near.y));
        let (trail_x, trail_y) = (px(frame.trail.x), px(frame.trail.y));
        let ring = px(style.ring_size_px);
        let trail = px(style.trail_size_px);
        let trail_opacity = format!("{}", style.trail_opacity);
        let (pointer_color, ring_color) = if style.accent {
            (CURSOR_ACCENT_COLOR, CURSOR_ACCENT_COLOR)
        } else {
            (CURSOR_POINTER_COLOR, CURSOR_RING_COLOR)
        };
        dom::set_styles(
            &c.pointer,
            &[
                ("display", "block"),
                ("left", pointer_x.as_str()),
                ("top", pointer_y.as_str()),
                ("transform", pointer_transform.as_str()),
                ("border-bottom-color", pointer_color),
            ],
        );
        dom::set_styles(
            &c.ring,
            &[
                ("display", "block"),
                ("left", near_x.as_str()),
                ("top", near_y.as_str()),
                ("width", ring.as_str()),
                ("height", ring.as_str()),
                ("border-color", ring_color),
            ],
        );
        dom::set_styles(
            &c.trail,
            &[
                ("display", "block"),
                ("left", trail_x.as_str()),
                ("top", trail_y.as_str()),
                ("width", trail.as_str()),
                ("height", trail.as_str()),
                ("opacity", trail_opacity.as_str()),
            ],
        );
    }

    fn hide_cursor(&mut self) {
        if let Some(c) = self.cursor.as_ref() {
            for el in [&c.pointer, &c.ring, &c.trail] {
                dom::set_style(el, "display", "none");
            }
        }
    }
}

fn entity_of(ev: &web::Event) -> Option<EntityId> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    let raw = el.get_attribute(ENTITY_ATTR)?.parse::<u64>().ok()?;
    Some(EntityId::from_raw(raw))
}
