//! Battery level via `navigator.getBattery()`, where the browser offers it.

use crate::app::{self, Shared};
use crate::dom;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve the battery manager, report the current level and follow
/// `levelchange`. Does nothing on browsers without the API.
pub async fn watch(shared: Shared) {
    let Some(window) = web::window() else {
        return;
    };
    let battery = match battery_manager(&window.navigator()).await {
        Ok(Some(b)) => b,
        Ok(None) => {
            log::info!("[battery] API unavailable");
            return;
        }
        Err(e) => {
            log::warn!("[battery] getBattery failed: {:?}", e);
            return;
        }
    };
    if !app::is_current(&shared) {
        return;
    }
    let now = dom::now_ms().unwrap_or(0.0);
    shared.borrow_mut().on_battery(level_of(&battery), now);

    let target: web::EventTarget = battery.clone().unchecked_into();
    let c = shared.clone();
    app::with_listeners(&shared, |listeners| {
        listeners.add(&target, "levelchange", move |_ev: web::Event| {
            let now = dom::now_ms().unwrap_or(0.0);
            c.borrow_mut().on_battery(level_of(&battery), now);
        });
    });
}

async fn battery_manager(navigator: &web::Navigator) -> Result<Option<JsValue>, JsValue> {
    let get = Reflect::get(navigator, &JsValue::from_str("getBattery"))?;
    let Some(get) = get.dyn_ref::<Function>() else {
        return Ok(None);
    };
    let promise: Promise = get.call0(navigator)?.dyn_into()?;
    JsFuture::from(promise).await.map(Some)
}

fn level_of(battery: &JsValue) -> Option<f64> {
    Reflect::get(battery, &JsValue::from_str("level"))
        .ok()
        .and_then(|v| v.as_f64())
}
