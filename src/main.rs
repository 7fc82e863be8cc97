mod components;
mod geometry;
mod listener;
mod model;
mod resize_tracker;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
