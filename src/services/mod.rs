pub mod logging;
pub mod scroll_lock;
pub mod smooth_scroll;
pub mod theme;
