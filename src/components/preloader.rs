use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

// Hold long enough for the first paint, fade out, then drop out of the DOM.
const HOLD_MS: u32 = 300;
const FADE_MS: u32 = 600;

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Visible,
    Fading,
    Done,
}

/// Full-page preloader. Once it is gone the body gets a `loaded` class so the
/// CSS entrance animations can run.
#[function_component(Preloader)]
pub fn preloader() -> Html {
    let stage = use_state(|| Stage::Visible);

    {
        let stage = stage.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                TimeoutFuture::new(HOLD_MS).await;
                stage.set(Stage::Fading);
                TimeoutFuture::new(FADE_MS).await;
                stage.set(Stage::Done);
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    let _ = body.class_list().add_1("loaded");
                }
            });
            || ()
        });
    }

    match *stage {
        Stage::Done => html! {},
        current => html! {
            <div
                id="preloader"
                class={classes!(matches!(current, Stage::Fading).then_some("preloader-hidden"))}
            >
                <div class="spinner"></div>
            </div>
        },
    }
}
