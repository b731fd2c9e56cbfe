//! Capability hints read from the browser.

use crate::constants::{COARSE_POINTER_QUERY, REDUCED_MOTION_QUERY};
use crate::dom;
use aurora_core::{HostError, HostSignals};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Read every capability hint. A missing frame clock is fatal to animation;
/// missing width is reported so the caller can fall back to mid-tier defaults.
pub fn read_signals() -> Result<HostSignals, HostError> {
    let window = web::window().ok_or(HostError::ClockUnavailable)?;
    if window.performance().is_none() || window.document().is_none() {
        return Err(HostError::ClockUnavailable);
    }
    let viewport_width = dom::viewport_width().ok_or(HostError::MissingSignal("innerWidth"))?;
    let navigator = window.navigator();
    let signals = HostSignals {
        viewport_width,
        device_memory_gb: navigator_number(&navigator, "deviceMemory"),
        logical_cores: navigator_number(&navigator, "hardwareConcurrency")
            .filter(|c| *c >= 1.0)
            .map(|c| c as u32),
        coarse_pointer: dom::matches_media(&window, COARSE_POINTER_QUERY),
        reduced_motion: dom::matches_media(&window, REDUCED_MOTION_QUERY),
    };
    Ok(signals)
}

// `deviceMemory` is not in every browser, so read it reflectively.
fn navigator_number(navigator: &web::Navigator, key: &str) -> Option<f64> {
    js_sys::Reflect::get(navigator, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite() && *v > 0.0)
}
