pub mod content_modal;
pub mod nav_menu;
pub mod preloader;
pub mod role_text;
pub mod theme_toggle;

pub use content_modal::ContentModal;
pub use nav_menu::NavMenu;
pub use preloader::Preloader;
pub use role_text::RoleText;
pub use theme_toggle::ThemeToggle;
