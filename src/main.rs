#![allow(warnings)]
//! Menu Admin Frontend Entry Point

mod api;
mod app;
mod category;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod store;

use app::App;
use config::MenuConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = MenuConfig::load();
    _ = console_log::init_with_level(config.log_level());
    log::info!("[APP] Menu admin starting, backend {}", config.base_url);

    mount_to_body(move || view! { <App config=config /> });
}
