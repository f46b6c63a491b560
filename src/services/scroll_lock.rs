//! Body scroll lock shared by the modals. Removing the scrollbar changes the
//! viewport width, so the lock compensates with equivalent right padding to
//! keep the layout from shifting.

use web_sys::{Document, Window};

pub fn lock() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let scrollbar = scrollbar_width(&window, &document);
    let style = body.style();
    let _ = style.set_property("overflow", "hidden");
    if scrollbar > 0.0 {
        let _ = style.set_property("padding-right", &format!("{scrollbar}px"));
    }
}

pub fn unlock() {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let _ = style.remove_property("overflow");
    let _ = style.remove_property("padding-right");
}

fn scrollbar_width(window: &Window, document: &Document) -> f64 {
    let inner = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let client = document
        .document_element()
        .map(|el| f64::from(el.client_width()))
        .unwrap_or(0.0);
    (inner - client).max(0.0)
}
