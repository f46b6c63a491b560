//! Modal lifecycle: a per-modal session state machine, a controller that
//! sequences the open/close timelines, and the browser adapters it runs on.

pub mod controller;
pub mod dom;
pub mod session;

pub use controller::{
    ActiveModal, MissingElement, ModalController, ModalId, ModalSurface, Scheduler,
};
pub use dom::{BrowserScheduler, DomSurface};
pub use session::{ModalSession, Phase};
