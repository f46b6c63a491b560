mod app;
mod components;
mod hooks;
mod modal;
mod services;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
