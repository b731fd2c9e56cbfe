use crate::app::Shared;
use crate::constants::HOVER_SELECTOR;
use crate::listeners::ListenerSet;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed pointer position, press state and hover state to the cursor follower.
pub fn wire_pointer(listeners: &mut ListenerSet, document: &web::Document, shared: &Shared) {
    let c = shared.clone();
    listeners.add(document, "mousemove", move |ev: web::Event| {
        if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
            let position = Vec2::new(m.client_x() as f32, m.client_y() as f32);
            c.borrow_mut().on_pointer_move(position);
        }
    });

    let c = shared.clone();
    listeners.add(document, "mousedown", move |_ev: web::Event| {
        c.borrow_mut().on_press(true);
    });
    let c = shared.clone();
    listeners.add(document, "mouseup", move |_ev: web::Event| {
        c.borrow_mut().on_press(false);
    });

    // mouseover bubbles, so one document listener covers every hover region
    let c = shared.clone();
    listeners.add(document, "mouseover", move |ev: web::Event| {
        let hover = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(HOVER_SELECTOR).ok().flatten())
            .is_some();
        c.borrow_mut().on_hover(hover);
    });
}
