use yew::prelude::*;

use crate::components::{ContentModal, NavMenu, Preloader, RoleText};
use crate::hooks::{use_modal, use_scroll_reveal};
use crate::modal::{ActiveModal, ModalId};
use crate::services::theme;

#[function_component(App)]
pub fn app() -> Html {
    let theme_pref = use_state(theme::load);

    // Re-apply on every change; also covers the initial load.
    use_effect_with(*theme_pref, |current| {
        theme::apply(*current);
        || ()
    });

    let on_toggle_theme = {
        let theme_pref = theme_pref.clone();
        Callback::from(move |_| theme_pref.set((*theme_pref).toggled()))
    };

    // Both modals share one active-modal slot; only one may hold the page.
    let active = use_memo((), |_| ActiveModal::new());
    let education = use_modal(ModalId::Education, &active);
    let experience = use_modal(ModalId::Experience, &active);

    let about_ref = use_node_ref();
    let experience_ref = use_node_ref();
    let education_ref = use_node_ref();
    let projects_ref = use_node_ref();
    let contact_ref = use_node_ref();
    use_scroll_reveal(about_ref.clone());
    use_scroll_reveal(experience_ref.clone());
    use_scroll_reveal(education_ref.clone());
    use_scroll_reveal(projects_ref.clone());
    use_scroll_reveal(contact_ref.clone());

    html! {
        <>
            <Preloader />
            <NavMenu theme={*theme_pref} on_toggle_theme={on_toggle_theme} />

            <section id="profile" class="entrance">
                <div class="profile-text">
                    <p class="greeting">{"Hello, I'm"}</p>
                    <h1 class="name">{"Priya Sharma"}</h1>
                    <p class="role">
                        <RoleText />
                    </p>
                    <div class="profile-buttons">
                        <a class="btn btn-primary" href="./assets/resume.pdf" download="resume.pdf">
                            {"Download CV"}
                        </a>
                    </div>
                </div>
            </section>

            <section id="about" ref={about_ref} class="scroll-reveal">
                <h2 class="section-title">{"About Me"}</h2>
                <p>
                    {"Analyst with a focus on turning messy operational data into \
                      decisions people can act on. Comfortable across the whole \
                      path from stakeholder interviews to dashboards."}
                </p>
            </section>

            <section id="experience" ref={experience_ref} class="scroll-reveal">
                <h2 class="section-title">{"Experience"}</h2>
                <div
                    class="detail-card"
                    role="button"
                    tabindex="0"
                    onclick={experience.open_on_click()}
                    ontouchstart={experience.touch_start()}
                    ontouchmove={experience.touch_move()}
                    ontouchend={experience.open_on_tap()}
                >
                    <h3>{"Where I've worked"}</h3>
                    <p>{"Tap to see the full history"}</p>
                </div>
            </section>

            <section id="education" ref={education_ref} class="scroll-reveal">
                <h2 class="section-title">{"Education"}</h2>
                <div
                    class="detail-card"
                    role="button"
                    tabindex="0"
                    onclick={education.open_on_click()}
                    ontouchstart={education.touch_start()}
                    ontouchmove={education.touch_move()}
                    ontouchend={education.open_on_tap()}
                >
                    <h3>{"Where I studied"}</h3>
                    <p>{"Tap to see degrees and certifications"}</p>
                </div>
            </section>

            <section id="projects" ref={projects_ref} class="scroll-reveal">
                <h2 class="section-title">{"Projects"}</h2>
                <div class="projects-grid">
                    <article class="project-card">
                        <img
                            data-light-src="./assets/project-sales-light.png"
                            data-dark-src="./assets/project-sales-dark.png"
                            src="./assets/project-sales-light.png"
                            alt="Sales funnel dashboard"
                        />
                        <h3>{"Sales Funnel Dashboard"}</h3>
                    </article>
                    <article class="project-card">
                        <img
                            data-light-src="./assets/project-churn-light.png"
                            data-dark-src="./assets/project-churn-dark.png"
                            src="./assets/project-churn-light.png"
                            alt="Churn analysis report"
                        />
                        <h3>{"Churn Analysis"}</h3>
                    </article>
                </div>
            </section>

            <section id="contact" ref={contact_ref} class="scroll-reveal">
                <h2 class="section-title">{"Get In Touch"}</h2>
                <a class="btn btn-secondary" href="mailto:hello@example.com">{"Email me"}</a>
            </section>

            <footer>
                <p>{"\u{00a9} 2026 Priya Sharma. All rights reserved."}</p>
            </footer>

            <ContentModal handle={experience.clone()} title="Experience">
                <ul class="timeline">
                    <li>
                        <h3>{"Business Analyst \u{2014} Meridian Retail"}</h3>
                        <p>{"2023 \u{2013} present. Demand forecasting and pricing reviews."}</p>
                    </li>
                    <li>
                        <h3>{"Data Analyst \u{2014} Northwind Logistics"}</h3>
                        <p>{"2021 \u{2013} 2023. Route utilisation and SLA reporting."}</p>
                    </li>
                </ul>
            </ContentModal>

            <ContentModal handle={education.clone()} title="Education">
                <ul class="timeline">
                    <li>
                        <h3>{"MSc Business Analytics"}</h3>
                        <p>{"University of Leeds, 2021"}</p>
                    </li>
                    <li>
                        <h3>{"BCom Economics"}</h3>
                        <p>{"University of Pune, 2019"}</p>
                    </li>
                </ul>
            </ContentModal>
        </>
    }
}
