//! The mounted background: coordinator, frame loop and every DOM listener.

use crate::battery;
use crate::dom;
use crate::events;
use crate::frame::RafLoop;
use crate::host;
use crate::listeners::ListenerSet;
use crate::surface::DomSurface;
use aurora_core::{initialize, AuroraOptions, Coordinator};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type Shared = Rc<RefCell<Coordinator<DomSurface>>>;

struct App {
    coordinator: Shared,
    raf: RafLoop,
    listeners: ListenerSet,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Build the coordinator from host signals and start animating. A second call
/// while mounted is a no-op.
pub fn mount(options: AuroraOptions) -> anyhow::Result<()> {
    if is_mounted() {
        log::warn!("[app] already mounted");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let surface = DomSurface::new(document.clone());
    let signals = host::read_signals();
    log::info!("[app] host signals {:?}", signals);
    let coordinator = initialize(signals, surface, options);
    events::lifecycle::sync_body_class(&document, coordinator.profile().small_viewport);
    let shared: Shared = Rc::new(RefCell::new(coordinator));

    let mut listeners = ListenerSet::default();
    events::wire_pointer(&mut listeners, &document, &shared);
    events::wire_lifecycle(&mut listeners, &window, &document, &shared);
    log::info!("[app] {} listeners attached", listeners.len());

    let c = shared.clone();
    let raf = RafLoop::new(move |now_ms| {
        c.borrow_mut().frame(now_ms);
    });
    raf.start();

    if document.hidden() {
        shared
            .borrow_mut()
            .on_visibility(false, dom::now_ms().unwrap_or(0.0));
    }

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            coordinator: shared.clone(),
            raf,
            listeners,
        })
    });
    spawn_local(battery::watch(shared));
    Ok(())
}

pub fn is_mounted() -> bool {
    APP.with(|app| app.borrow().is_some())
}

/// Whether `shared` is the coordinator of the mounted app, and not one
/// replaced by a later mount.
pub fn is_current(shared: &Shared) -> bool {
    APP.with(|app| {
        app.borrow()
            .as_ref()
            .is_some_and(|app| Rc::ptr_eq(&app.coordinator, shared))
    })
}

/// Attach more listeners to the mounted app, e.g. once an async API resolves.
/// Does nothing if `shared` is no longer the mounted coordinator.
pub fn with_listeners(shared: &Shared, f: impl FnOnce(&mut ListenerSet)) {
    APP.with(|app| {
        if let Some(app) = app.borrow_mut().as_mut() {
            if Rc::ptr_eq(&app.coordinator, shared) {
                f(&mut app.listeners);
            }
        }
    });
}

/// Stop the frame loop, detach every listener and remove every node.
pub fn teardown() {
    let Some(mut app) = APP.with(|app| app.borrow_mut().take()) else {
        return;
    };
    app.raf.stop();
    app.listeners.remove_all();
    let mut coordinator = app.coordinator.borrow_mut();
    let released = coordinator.teardown();
    coordinator.surface_mut().detach();
    log::info!("[app] unmounted, {} entities released", released);
}
