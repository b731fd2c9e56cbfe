//! `requestAnimationFrame` loop feeding timestamps to a callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type RafClosure = Closure<dyn FnMut(f64)>;

struct RafInner {
    closure: RefCell<Option<RafClosure>>,
    callback: RefCell<Box<dyn FnMut(f64)>>,
    running: Cell<bool>,
    raf_id: Cell<Option<i32>>,
}

/// Re-registers itself every frame until stopped or dropped.
pub struct RafLoop {
    inner: Rc<RafInner>,
}

impl RafLoop {
    pub fn new(callback: impl FnMut(f64) + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                raf_id: Cell::new(None),
            }),
        }
    }

    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if !inner.running.get() {
                return;
            }
            (inner.callback.borrow_mut())(timestamp_ms);
            if inner.running.get() {
                if let Some(closure) = inner.closure.borrow().as_ref() {
                    inner.raf_id.set(request_frame(closure));
                }
            }
        }) as Box<dyn FnMut(f64)>);

        self.inner.raf_id.set(request_frame(&closure));
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Cancel the pending frame. The loop can be started again.
    pub fn stop(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.inner.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        self.inner.closure.borrow_mut().take();
    }
}

fn request_frame(closure: &RafClosure) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(closure.as_ref().unchecked_ref()).ok())
}
