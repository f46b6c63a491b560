use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Fires the callback whenever Escape is pressed anywhere in the document.
/// The listener is installed once and removed on unmount.
#[hook]
pub fn use_escape_key(on_escape: Callback<()>) {
    use_effect_with((), move |_| {
        let installed = web_sys::window().and_then(|w| w.document()).map(|document| {
            let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
                if event.key() == "Escape" {
                    on_escape.emit(());
                }
            }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            (document, closure)
        });
        move || {
            if let Some((document, closure)) = installed {
                let _ = document
                    .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
        }
    });
}
