use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Set a batch of inline style properties, ignoring individual failures.
pub fn set_styles(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

pub fn viewport_width() -> Option<f64> {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// `performance.now()` or `None` when the host has no high-resolution clock.
pub fn now_ms() -> Option<f64> {
    web::window().and_then(|w| w.performance()).map(|p| p.now())
}

pub fn matches_media(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}
