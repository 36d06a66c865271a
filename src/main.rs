//! Category Browser Frontend Entry Point

mod app;
mod clipboard;
mod components;
mod config;
mod context;
mod filter;
mod image_proxy;
mod loader;
mod models;
mod pagination;
mod store;
mod theme;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
