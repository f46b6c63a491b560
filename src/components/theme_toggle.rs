use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub id: AttrValue,
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

/// One theme toggle button. Rendered twice: once in the desktop nav and once
/// inside the hamburger menu, sharing lifted state in `App`.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button
            id={props.id.clone()}
            class="theme-toggle"
            {onclick}
            aria-label="Toggle color theme"
        >
            <img src={props.theme.toggle_icon_src()} alt="" />
        </button>
    }
}
