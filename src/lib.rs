#![cfg(target_arch = "wasm32")]
use aurora_core::AuroraOptions;
use wasm_bindgen::prelude::*;

mod app;
mod battery;
mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod listeners;
mod page;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aurora-web loaded; waiting for initialize()");
    Ok(())
}

/// Handle returned to page glue. Dropping it does not stop the animation.
#[wasm_bindgen]
pub struct SchedulerHandle {
    _private: (),
}

#[wasm_bindgen]
impl SchedulerHandle {
    /// Stop every animation and release every node. Safe to call repeatedly.
    pub fn teardown(&self) {
        app::teardown();
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        app::is_mounted()
    }
}

/// Mount the background and return a handle to it. `seed` fixes the random
/// stream, e.g. for screenshots. Calling again while mounted keeps the running
/// background unless a seed is given, in which case it is rebuilt with it.
#[wasm_bindgen]
pub fn initialize(seed: Option<u64>) -> Result<SchedulerHandle, JsValue> {
    let options = AuroraOptions {
        seed: seed.unwrap_or_else(rand::random),
        ..AuroraOptions::default()
    };
    if seed.is_some() && app::is_mounted() {
        app::teardown();
    }
    app::mount(options).map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
    Ok(SchedulerHandle { _private: () })
}
