use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::services::smooth_scroll;
use crate::services::theme::Theme;

/// In-page sections the nav links to, in display order.
pub const SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavMenuProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

/// Desktop nav plus the mobile hamburger menu. The hamburger toggles an
/// `open` class on both the menu links and the icon; picking a link closes
/// the menu and smooth scrolls to the section.
#[function_component(NavMenu)]
pub fn nav_menu(props: &NavMenuProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let link = |id: &'static str, close_menu: bool| {
        let is_open = is_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if close_menu {
                is_open.set(false);
            }
            smooth_scroll::scroll_to_section(id);
        })
    };

    let open_class = (*is_open).then_some("open");

    html! {
        <>
            <nav id="desktop-nav">
                <div class="logo">{"Portfolio"}</div>
                <ul class="nav-links">
                    { for SECTIONS.iter().map(|&(id, label)| html! {
                        <li><a href={format!("#{id}")} onclick={link(id, false)}>{label}</a></li>
                    }) }
                    <li>
                        <ThemeToggle
                            id="theme-toggle-desktop"
                            theme={props.theme}
                            on_toggle={props.on_toggle_theme.clone()}
                        />
                    </li>
                </ul>
            </nav>
            <nav id="hamburger-nav">
                <div class="logo">{"Portfolio"}</div>
                <div class="hamburger-menu">
                    <button
                        class={classes!("hamburger-icon", open_class)}
                        onclick={toggle}
                        aria-label="Menu"
                        aria-expanded={(*is_open).to_string()}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class={classes!("menu-links", open_class)}>
                        <ul>
                            { for SECTIONS.iter().map(|&(id, label)| html! {
                                <li><a href={format!("#{id}")} onclick={link(id, true)}>{label}</a></li>
                            }) }
                            <li>
                                <ThemeToggle
                                    id="theme-toggle-mobile"
                                    theme={props.theme}
                                    on_toggle={props.on_toggle_theme.clone()}
                                />
                            </li>
                        </ul>
                    </div>
                </div>
            </nav>
        </>
    }
}
