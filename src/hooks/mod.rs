pub mod use_escape_key;
pub mod use_modal;
pub mod use_scroll_reveal;

pub use use_escape_key::use_escape_key;
pub use use_modal::{use_modal, ModalHandle};
pub use use_scroll_reveal::use_scroll_reveal;
