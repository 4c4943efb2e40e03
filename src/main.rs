//! Objects Table Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod form;
mod models;
mod notify;
mod table;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Parse first, log after: the level comes from the stored config
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let level = console_logger::parse_level(&config.log_level);
    if let Err(e) = console_logger::init_logger("ObjectsTable", level) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
    if let Some(e) = load_error {
        log::warn!("[CONFIG] Ignoring stored config: {}", e);
    }
    log::info!("[APP] Starting against {}", config.collection_url());

    mount_to_body(move || view! { <App config=config /> });
}
