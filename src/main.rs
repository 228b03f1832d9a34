#![allow(warnings)]
//! Lost & Found Frontend Entry Point

mod commands;
mod config;
mod context;
mod storage;
mod store;
mod components;
mod app;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_env();
    // Fails only if a logger is already installed
    let _ = console_logger::init_logger("LostFound", config.log_level);
    log::info!("starting, api base {:?}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
