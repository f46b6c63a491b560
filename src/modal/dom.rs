//! Browser-backed implementations of the controller seams.

use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::NodeRef;

use crate::modal::controller::{MissingElement, ModalSurface, Scheduler};
use crate::services::scroll_lock;

const OPEN_EXPAND_TRANSITION: &str =
    "transform 0.4s cubic-bezier(0.34, 1.56, 0.64, 1), opacity 0.4s ease";
const CLOSE_BLUR_TRANSITION: &str =
    "transform 0.35s ease, opacity 0.35s ease, filter 0.35s ease";
const CLOSE_COLLAPSE_TRANSITION: &str =
    "transform 0.3s cubic-bezier(0.6, -0.28, 0.735, 0.045), opacity 0.3s ease";
const BACKDROP_FADE_TRANSITION: &str = "opacity 1.5s ease";

/// The overlay / content panel / close control triple of one modal, resolved
/// lazily from `NodeRef`s so a missing element degrades to a no-op instead of
/// a stale handle.
pub struct DomSurface {
    overlay: NodeRef,
    panel: NodeRef,
    close_control: NodeRef,
}

impl DomSurface {
    pub fn new(overlay: NodeRef, panel: NodeRef, close_control: NodeRef) -> Self {
        Self {
            overlay,
            panel,
            close_control,
        }
    }

    /// Bind-time diagnostic: verifies all three elements resolve.
    pub fn check_bound(&self) -> Result<(), MissingElement> {
        self.overlay_el()?;
        self.panel_el()?;
        self.close_el()?;
        Ok(())
    }

    fn overlay_el(&self) -> Result<HtmlElement, MissingElement> {
        self.overlay
            .cast::<HtmlElement>()
            .ok_or(MissingElement("overlay"))
    }

    fn panel_el(&self) -> Result<HtmlElement, MissingElement> {
        self.panel
            .cast::<HtmlElement>()
            .ok_or(MissingElement("content panel"))
    }

    fn close_el(&self) -> Result<HtmlElement, MissingElement> {
        self.close_control
            .cast::<HtmlElement>()
            .ok_or(MissingElement("close control"))
    }
}

impl ModalSurface for DomSurface {
    fn prepare_open(&self) -> Result<(), MissingElement> {
        let overlay = self.overlay_el()?;
        let panel = self.panel_el()?;
        let style = panel.style();
        let _ = style.set_property("transition", "none");
        let _ = style.set_property("transform", "scale(0.05)");
        let _ = style.set_property("opacity", "0");
        let _ = overlay.class_list().add_1("open");
        scroll_lock::lock();
        Ok(())
    }

    fn expand(&self) -> Result<(), MissingElement> {
        let panel = self.panel_el()?;
        let style = panel.style();
        let _ = style.set_property("transition", OPEN_EXPAND_TRANSITION);
        let _ = style.set_property("transform", "scale(1)");
        let _ = style.set_property("opacity", "1");
        Ok(())
    }

    fn focus_close_control(&self) -> Result<(), MissingElement> {
        let control = self.close_el()?;
        let _ = control.focus();
        Ok(())
    }

    fn begin_blur(&self) -> Result<(), MissingElement> {
        let overlay = self.overlay_el()?;
        let panel = self.panel_el()?;
        let style = panel.style();
        let _ = style.set_property("transition", CLOSE_BLUR_TRANSITION);
        let _ = style.set_property("filter", "blur(6px)");
        let _ = style.set_property("transform", "scale(0.92)");
        let _ = style.set_property("opacity", "0.6");
        let overlay_style = overlay.style();
        let _ = overlay_style.set_property("transition", BACKDROP_FADE_TRANSITION);
        let _ = overlay_style.set_property("opacity", "0");
        Ok(())
    }

    fn collapse(&self) -> Result<(), MissingElement> {
        let panel = self.panel_el()?;
        let style = panel.style();
        let _ = style.set_property("transition", CLOSE_COLLAPSE_TRANSITION);
        let _ = style.set_property("transform", "scale(0)");
        let _ = style.set_property("opacity", "0");
        Ok(())
    }

    fn settle_closed(&self) -> Result<(), MissingElement> {
        let overlay = self.overlay_el()?;
        let panel = self.panel_el()?;
        let _ = overlay.class_list().remove_1("open");
        let overlay_style = overlay.style();
        let _ = overlay_style.remove_property("transition");
        let _ = overlay_style.remove_property("opacity");
        let style = panel.style();
        let _ = style.remove_property("transition");
        let _ = style.remove_property("transform");
        let _ = style.remove_property("opacity");
        let _ = style.remove_property("filter");
        scroll_lock::unlock();
        Ok(())
    }
}

/// Timers on the UI event loop: `TimeoutFuture` for fixed delays and
/// `requestAnimationFrame` for paint-aligned continuations.
pub struct BrowserScheduler;

impl BrowserScheduler {
    pub fn shared() -> Rc<dyn Scheduler> {
        Rc::new(Self)
    }
}

impl Scheduler for BrowserScheduler {
    fn delay(&self, ms: u32, cb: Box<dyn FnOnce()>) {
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            cb();
        });
    }

    fn next_frame(&self, cb: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move || cb());
        if window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .is_ok()
        {
            // One-shot; the browser drops the JS side after invocation.
            closure.forget();
        }
    }
}
