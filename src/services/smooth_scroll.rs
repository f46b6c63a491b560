use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth scrolls the viewport to the section with the given id. Silent no-op
/// when the section is absent.
pub fn scroll_to_section(id: &str) {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
