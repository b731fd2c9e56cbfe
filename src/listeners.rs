//! Event listeners that can be detached again.
//!
//! Every closure handed to the browser is kept here instead of being leaked with
//! `forget`, so teardown can unregister it and free the Rust side.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[listeners] could not attach {}: {:?}", event, e);
            return;
        }
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            closure,
        });
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Unregister and drop every listener. Must not run from inside one of them.
    pub fn remove_all(&mut self) {
        for l in self.listeners.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.event, l.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.remove_all();
    }
}
