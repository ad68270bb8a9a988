mod api;
mod app;
mod catalog;
mod components;
mod context;
mod engine;
mod models;
mod player;
mod storage;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
