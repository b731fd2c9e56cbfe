//! Pointer smoothing into trailing cursor markers.
//!
//! Three markers are driven from the latest pointer sample: a directional pointer
//! that sits on the raw position, a ring that follows with a fast gain and a
//! trailing dot that follows with a slow gain. Samples arriving between frames
//! overwrite each other; only the latest one is consumed.

use crate::constants::{CURSOR_HEADING_EPSILON_PX, CURSOR_NEAR_GAIN, CURSOR_TRAIL_GAIN};
use glam::Vec2;

/// Target sizes and emphasis for the current pointer state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub ring_size_px: f32,
    pub trail_size_px: f32,
    pub trail_opacity: f32,
    pub pointer_scale: f32,
    /// Use the accent color (hovering an interactive region).
    pub accent: bool,
}

impl MarkerStyle {
    pub fn for_state(hover: bool, pressed: bool) -> Self {
        let mut style = if hover {
            Self {
                ring_size_px: 60.0,
                trail_size_px: 30.0,
                trail_opacity: 0.6,
                pointer_scale: 1.3,
                accent: true,
            }
        } else {
            Self {
                ring_size_px: 40.0,
                trail_size_px: 20.0,
                trail_opacity: 0.3,
                pointer_scale: 1.0,
                accent: false,
            }
        };
        if pressed {
            style.ring_size_px = 35.0;
            style.pointer_scale = 0.8;
        }
        style
    }
}

/// Marker poses for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub pointer: Vec2,
    pub near: Vec2,
    pub trail: Vec2,
    /// `atan2` of the trail → pointer vector, in degrees.
    pub heading_deg: f32,
    pub style: MarkerStyle,
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    target: Option<Vec2>,
    near: Vec2,
    trail: Vec2,
    near_gain: f32,
    trail_gain: f32,
    heading_deg: f32,
    hover: bool,
    pressed: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CURSOR_NEAR_GAIN, CURSOR_TRAIL_GAIN)
    }
}

impl CursorFollower {
    pub fn new(near_gain: f32, trail_gain: f32) -> Self {
        Self {
            target: None,
            near: Vec2::ZERO,
            trail: Vec2::ZERO,
            near_gain: near_gain.clamp(0.0, 1.0),
            trail_gain: trail_gain.clamp(0.0, 1.0),
            heading_deg: 0.0,
            hover: false,
            pressed: false,
        }
    }

    /// Record the latest pointer position. The first sample snaps every marker.
    pub fn push_pointer(&mut self, position: Vec2) {
        if !position.is_finite() {
            return;
        }
        if self.target.is_none() {
            self.near = position;
            self.trail = position;
        }
        self.target = Some(position);
    }

    pub fn set_hover(&mut self, hover: bool) {
        self.hover = hover;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn near(&self) -> Vec2 {
        self.near
    }

    pub fn trail(&self) -> Vec2 {
        self.trail
    }

    /// One smoothing step. `None` until a pointer sample has arrived.
    pub fn tick(&mut self) -> Option<CursorFrame> {
        let target = self.target?;
        self.near += (target - self.near) * self.near_gain;
        self.trail += (target - self.trail) * self.trail_gain;
        let d = target - self.trail;
        if d.length() > CURSOR_HEADING_EPSILON_PX {
            self.heading_deg = d.y.atan2(d.x).to_degrees();
        }
        Some(CursorFrame {
            pointer: target,
            near: self.near,
            trail: self.trail,
            heading_deg: self.heading_deg,
            style: MarkerStyle::for_state(self.hover, self.pressed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_draw_before_first_sample() {
        let mut c = CursorFollower::default();
        assert!(c.tick().is_none());
    }

    #[test]
    fn only_latest_sample_is_followed() {
        let mut c = CursorFollower::new(1.0, 1.0);
        c.push_pointer(Vec2::new(0.0, 0.0));
        c.push_pointer(Vec2::new(10.0, 0.0));
        c.push_pointer(Vec2::new(20.0, 5.0));
        let f = c.tick().unwrap();
        assert_eq!(f.near, Vec2::new(20.0, 5.0));
    }

    #[test]
    fn heading_holds_when_trail_catches_up() {
        let mut c = CursorFollower::new(0.5, 0.5);
        c.push_pointer(Vec2::ZERO);
        c.push_pointer(Vec2::new(0.0, 100.0));
        let first = c.tick().unwrap();
        assert!((first.heading_deg - 90.0).abs() < 1e-3);
        for _ in 0..200 {
            c.tick();
        }
        let settled = c.tick().unwrap();
        assert!((settled.heading_deg - 90.0).abs() < 1e-3);
    }

    #[test]
    fn press_shrinks_ring_regardless_of_hover() {
        assert_eq!(MarkerStyle::for_state(false, true).ring_size_px, 35.0);
        assert_eq!(MarkerStyle::for_state(true, true).ring_size_px, 35.0);
        assert!(MarkerStyle::for_state(true, false).accent);
    }
}
