//! TaskFlow Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load_config();
    let config = loaded.clone().unwrap_or_default();

    let logger_config = LoggerConfig {
        level: config.logging.level_filter().unwrap_or(log::LevelFilter::Info),
        capacity: config.logging.capacity,
    };
    if let Err(e) = rolling_logger::init_logger("TaskFlow", logger_config) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    if let Err(e) = loaded {
        log::warn!("[APP] Ignoring page config: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
