//! Tagging Console Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod pages;
mod pagination;
mod review;
mod session;
mod store;
mod upload;
mod views;

use app::App;
use config::ConsoleConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let (config, config_warning) = ConsoleConfig::load();
    if let Err(e) = console_logger::init_with_capacity(config.level_filter(), config.log_buffer_lines) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", e).into());
    }
    if let Some(warning) = config_warning {
        log::warn!("{}", warning);
    }
    log::info!("[APP] Tagging console starting");
    mount_to_body(move || view! { <App config=config.clone() /> });
}
