use crate::app::{self, Shared};
use crate::constants::MOBILE_BODY_CLASS;
use crate::dom;
use crate::host;
use crate::listeners::ListenerSet;
use crate::page::PageTransition;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Visibility, viewport resize and page unload.
pub fn wire_lifecycle(
    listeners: &mut ListenerSet,
    window: &web::Window,
    document: &web::Document,
    shared: &Shared,
) {
    let c = shared.clone();
    let doc = document.clone();
    listeners.add(document, "visibilitychange", move |_ev: web::Event| {
        let now = dom::now_ms().unwrap_or(0.0);
        c.borrow_mut().on_visibility(!doc.hidden(), now);
    });

    let c = shared.clone();
    let doc = document.clone();
    listeners.add(window, "resize", move |_ev: web::Event| {
        let Ok(signals) = host::read_signals() else {
            return;
        };
        log::debug!("[resize] {:?}", signals);
        let mut coordinator = c.borrow_mut();
        coordinator.on_resize(&signals);
        sync_body_class(&doc, coordinator.profile().small_viewport);
    });

    // Teardown drops these listeners, so it cannot run inside one of them.
    let c = shared.clone();
    listeners.add(window, "pagehide", move |ev: web::Event| {
        let transition = PageTransition::on_hide(persisted(&ev));
        if transition.tears_down() {
            spawn_local(async {
                app::teardown();
            });
        } else {
            apply_visibility(&c, transition);
        }
    });

    let c = shared.clone();
    listeners.add(window, "pageshow", move |ev: web::Event| {
        apply_visibility(&c, PageTransition::on_show(persisted(&ev)));
    });
}

fn persisted(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::PageTransitionEvent>()
        .map(|e| e.persisted())
        .unwrap_or(false)
}

fn apply_visibility(shared: &Shared, transition: PageTransition) {
    if let Some(visible) = transition.visibility() {
        let now = dom::now_ms().unwrap_or(0.0);
        log::debug!("[page] {:?}", transition);
        shared.borrow_mut().on_visibility(visible, now);
    }
}

pub fn sync_body_class(document: &web::Document, small_viewport: bool) {
    if let Some(body) = document.body() {
        let classes = body.class_list();
        _ = if small_viewport {
            classes.add_1(MOBILE_BODY_CLASS)
        } else {
            classes.remove_1(MOBILE_BODY_CLASS)
        };
    }
}
