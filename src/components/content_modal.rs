use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::hooks::{use_escape_key, ModalHandle};

#[derive(Properties, PartialEq)]
pub struct ContentModalProps {
    pub handle: ModalHandle,
    pub title: AttrValue,
    pub children: Html,
}

/// The overlay/panel/close-control triple of one modal. Tapping or clicking
/// the dimmed overlay closes it; interactions inside the content panel are
/// swallowed so they cannot reach the overlay's close handler.
#[function_component(ContentModal)]
pub fn content_modal(props: &ContentModalProps) -> Html {
    let handle = props.handle.clone();

    {
        let controller = handle.controller.clone();
        use_escape_key(Callback::from(move |_| {
            controller.handle_escape(js_sys::Date::now());
        }));
    }

    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let swallow_touch = Callback::from(|e: TouchEvent| e.stop_propagation());

    html! {
        <div
            class="modal-overlay"
            ref={handle.overlay_ref.clone()}
            onclick={handle.close_on_click()}
            ontouchstart={handle.touch_start()}
            ontouchmove={handle.touch_move()}
            ontouchend={handle.close_on_tap()}
        >
            <div
                class="modal-content"
                ref={handle.panel_ref.clone()}
                onclick={swallow_click}
                ontouchstart={swallow_touch.clone()}
                ontouchend={swallow_touch}
            >
                <button
                    type="button"
                    class="modal-close"
                    ref={handle.close_ref.clone()}
                    onclick={handle.close_on_click()}
                    aria-label="Close"
                >
                    {"\u{00d7}"}
                </button>
                <h2 class="modal-title">{props.title.clone()}</h2>
                <div class="modal-body">{props.children.clone()}</div>
            </div>
        </div>
    }
}

// Real event dispatch needs a browser, so these only build for the wasm test
// runner (`wasm-pack test --headless`).
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use crate::hooks::ModalHandle;
    use crate::modal::{ActiveModal, ModalId, Phase};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(handle: ModalHandle) {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<ContentModal>::with_root_and_props(
            root,
            ContentModalProps {
                handle,
                title: "History".into(),
                children: html! { <p>{"body"}</p> },
            },
        )
        .render();
    }

    #[wasm_bindgen_test]
    async fn panel_clicks_never_reach_the_overlay_close_handler() {
        let handle = ModalHandle::new(ModalId::Education, ActiveModal::new());
        mount(handle.clone());
        TimeoutFuture::new(50).await;

        handle.controller.open(js_sys::Date::now());
        // Two frames plus the expand transition.
        TimeoutFuture::new(650).await;
        assert_eq!(handle.controller.phase(), Phase::Open);

        let panel: web_sys::HtmlElement = handle.panel_ref.cast().unwrap();
        panel.click();
        assert_eq!(handle.controller.phase(), Phase::Open);

        let overlay: web_sys::HtmlElement = handle.overlay_ref.cast().unwrap();
        overlay.click();
        assert_eq!(handle.controller.phase(), Phase::Closing);
    }
}
