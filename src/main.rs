//! Branches TODO Frontend Entry Point

mod storage;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    log::info!("[APP] Branches TODO starting");
    mount_to_body(App);
}
