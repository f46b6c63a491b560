use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Fraction of the element that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.2;

/// Toggles a `visible` class on the referenced element as it enters and
/// leaves the viewport, so the reveal animation replays on every scroll.
/// One observer per tracked element, disconnected on unmount.
#[hook]
pub fn use_scroll_reveal(node_ref: NodeRef) {
    use_effect_with(node_ref, |node_ref| {
        let mut observing = None;
        if let Some(element) = node_ref.cast::<web_sys::Element>() {
            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let class_list = entry.target().class_list();
                        if entry.is_intersecting() {
                            let _ = class_list.add_1("visible");
                        } else {
                            let _ = class_list.remove_1("visible");
                        }
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            match IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => {
                    observer.observe(&element);
                    observing = Some((observer, callback));
                }
                Err(_) => {
                    Logger::error_with_component("scroll-reveal", "observer construction failed");
                }
            }
        } else {
            Logger::warn_with_component("scroll-reveal", "reveal target not mounted");
        }
        move || {
            if let Some((observer, _callback)) = observing {
                observer.disconnect();
            }
        }
    });
}
