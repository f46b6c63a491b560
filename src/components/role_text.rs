use std::cell::Cell;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Role titles cycled in the hero section.
pub const ROLES: &[&str] = &["Business Analyst", "Data Analyst"];

const INITIAL_DELAY_MS: u32 = 1_000;
const PAUSE_BETWEEN_ROLES_MS: u32 = 2_000;
// Fixed delays matching the wipe-out / wipe-in CSS animation durations; the
// cycle waits at least this long, not exactly until the paint finishes.
const WIPE_OUT_MS: u32 = 450;
const WIPE_IN_MS: u32 = 450;

#[derive(Clone, Copy, PartialEq)]
enum WipePhase {
    Steady,
    Hiding,
    Revealing,
}

impl WipePhase {
    fn class(self) -> Option<&'static str> {
        match self {
            WipePhase::Steady => None,
            WipePhase::Hiding => Some("hiding"),
            WipePhase::Revealing => Some("revealing"),
        }
    }
}

/// Cycles through [`ROLES`] with a CSS wipe: hide the current title, swap the
/// text while it is hidden, reveal the next one, pause, repeat.
#[function_component(RoleText)]
pub fn role_text() -> Html {
    let index = use_state(|| 0usize);
    let phase = use_state(|| WipePhase::Steady);
    let alive = use_memo((), |_| Cell::new(true));

    {
        let index = index.clone();
        let phase = phase.clone();
        let alive = alive.clone();
        use_effect_with((), move |_| {
            let task_alive = alive.clone();
            spawn_local(async move {
                let mut current = 0usize;
                TimeoutFuture::new(INITIAL_DELAY_MS).await;
                while task_alive.get() {
                    phase.set(WipePhase::Hiding);
                    TimeoutFuture::new(WIPE_OUT_MS).await;
                    if !task_alive.get() {
                        break;
                    }
                    current = (current + 1) % ROLES.len();
                    index.set(current);
                    phase.set(WipePhase::Revealing);
                    TimeoutFuture::new(WIPE_IN_MS).await;
                    if !task_alive.get() {
                        break;
                    }
                    phase.set(WipePhase::Steady);
                    TimeoutFuture::new(PAUSE_BETWEEN_ROLES_MS).await;
                }
            });
            move || alive.set(false)
        });
    }

    html! {
        <span id="role-text-container" class={classes!("role-text-wipe", phase.class())}>
            <span id="role-text">{ ROLES[*index] }</span>
        </span>
    }
}
