use crate::app::App;

mod api;
mod app;
mod components;
mod session;
mod store;
mod theme;

fn main() {
    yew::Renderer::<App>::new().render();
}
