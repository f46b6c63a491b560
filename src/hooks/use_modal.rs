use std::rc::Rc;

use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::modal::{
    ActiveModal, BrowserScheduler, DomSurface, MissingElement, ModalController, ModalId,
};
use crate::services::logging::Logger;

/// A bound modal: the controller plus the node refs its surface resolves.
/// The refs go onto the markup rendered by `ContentModal`; the callbacks go
/// onto whichever element opens the modal.
#[derive(Clone)]
pub struct ModalHandle {
    pub controller: ModalController,
    pub overlay_ref: NodeRef,
    pub panel_ref: NodeRef,
    pub close_ref: NodeRef,
    surface: Rc<DomSurface>,
}

impl PartialEq for ModalHandle {
    fn eq(&self, other: &Self) -> bool {
        self.controller.ptr_eq(&other.controller)
    }
}

impl ModalHandle {
    pub(crate) fn new(id: ModalId, active: ActiveModal) -> Self {
        let overlay_ref = NodeRef::default();
        let panel_ref = NodeRef::default();
        let close_ref = NodeRef::default();
        let surface = Rc::new(DomSurface::new(
            overlay_ref.clone(),
            panel_ref.clone(),
            close_ref.clone(),
        ));
        let controller = ModalController::new(
            id,
            active,
            surface.clone(),
            BrowserScheduler::shared(),
        );
        Self {
            controller,
            overlay_ref,
            panel_ref,
            close_ref,
            surface,
        }
    }

    pub fn open_on_click(&self) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |_: MouseEvent| controller.open(js_sys::Date::now()))
    }

    pub fn close_on_click(&self) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |_: MouseEvent| controller.close(js_sys::Date::now()))
    }

    pub fn touch_start(&self) -> Callback<TouchEvent> {
        let controller = self.controller.clone();
        Callback::from(move |_: TouchEvent| controller.touch_started(js_sys::Date::now()))
    }

    pub fn touch_move(&self) -> Callback<TouchEvent> {
        let controller = self.controller.clone();
        Callback::from(move |_: TouchEvent| controller.touch_moved())
    }

    /// Tap opens; scrolls and long presses fall through. An accepted tap
    /// suppresses the synthetic click that would otherwise follow.
    pub fn open_on_tap(&self) -> Callback<TouchEvent> {
        let controller = self.controller.clone();
        Callback::from(move |event: TouchEvent| {
            let now = js_sys::Date::now();
            if controller.tap_finished(now) {
                event.prevent_default();
                controller.open(now);
            }
        })
    }

    pub fn close_on_tap(&self) -> Callback<TouchEvent> {
        let controller = self.controller.clone();
        Callback::from(move |event: TouchEvent| {
            let now = js_sys::Date::now();
            if controller.tap_finished(now) {
                event.prevent_default();
                controller.close(now);
            }
        })
    }
}

/// Creates the session and controller for one modal. The session lives for
/// the life of the page; a missing element at bind time is logged once, and
/// from then on the installed open/close callbacks silently no-op.
#[hook]
pub fn use_modal(id: ModalId, active: &ActiveModal) -> ModalHandle {
    let handle = {
        let active = active.clone();
        (*use_state(move || ModalHandle::new(id, active))).clone()
    };

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            match handle.surface.check_bound() {
                Err(missing) => Logger::warn_with_component(
                    "content-modal",
                    &bind_warning(missing, handle.controller.id()),
                ),
                Ok(()) => Logger::debug_with_component(
                    "content-modal",
                    &format!("{:?} modal bound", handle.controller.id()),
                ),
            }
            || ()
        });
    }

    handle
}

fn bind_warning(missing: MissingElement, id: ModalId) -> String {
    format!("{missing}; {id:?} open/close requests will no-op")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn clones_share_one_session() {
        let handle = ModalHandle::new(ModalId::Education, ActiveModal::new());
        let clone = handle.clone();
        assert!(handle == clone);
    }

    #[wasm_bindgen_test]
    fn distinct_modals_get_distinct_sessions() {
        let active = ActiveModal::new();
        let education = ModalHandle::new(ModalId::Education, active.clone());
        let experience = ModalHandle::new(ModalId::Experience, active);
        assert!(education != experience);
    }

    #[wasm_bindgen_test]
    fn bind_warning_describes_the_noop_degradation() {
        let message = bind_warning(MissingElement("overlay"), ModalId::Education);
        assert!(message.contains("overlay"));
        assert!(message.contains("no-op"));
    }
}
