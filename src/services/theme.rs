//! Light/dark theme with a single persisted `localStorage` slot.
//!
//! The slot holds the raw strings `"dark"` / `"light"`; anything else (or an
//! empty slot) falls back to light. Applying a theme sets `data-theme` on the
//! body and swaps every `img[data-light-src]` to the variant for that theme.

use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

use crate::services::logging::Logger;

pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_slot(raw: &str) -> Self {
        match raw {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the theme toggle buttons.
    pub fn toggle_icon_src(self) -> &'static str {
        match self {
            Theme::Light => "./assets/theme_light.png",
            Theme::Dark => "./assets/theme-dark.png",
        }
    }

    fn icon_attr(self) -> &'static str {
        match self {
            Theme::Light => "data-light-src",
            Theme::Dark => "data-dark-src",
        }
    }
}

/// Reads the saved preference; read once at startup.
pub fn load() -> Theme {
    LocalStorage::raw()
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
        .map(|raw| Theme::from_slot(&raw))
        .unwrap_or_default()
}

/// Applies the theme to the page and persists it.
pub fn apply(theme: Theme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
        swap_themed_icons(&document, theme);
    }
    let _ = LocalStorage::raw().set_item(STORAGE_KEY, theme.as_str());
    Logger::info_with_component("theme", &format!("applied {} theme", theme.as_str()));
}

fn swap_themed_icons(document: &Document, theme: Theme) {
    let Ok(icons) = document.query_selector_all("img[data-light-src]") else {
        return;
    };
    for index in 0..icons.length() {
        let Some(node) = icons.item(index) else {
            continue;
        };
        let Ok(img) = node.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        if let Some(src) = img.get_attribute(theme.icon_attr()) {
            img.set_src(&src);
        }
    }
}
