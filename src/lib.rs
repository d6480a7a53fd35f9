use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Entry point: resolve config, install logging and mount the app.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = config::app_config().clone();
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));
    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new(config.log_level)));

    crate::log_info!(
        LogComponent::Presentation("Initialize"),
        "🚀 Investment Lens starting, API at {} (log level {})",
        config.api_base,
        config.log_level.to_string().trim()
    );

    leptos::mount_to_body(move || leptos::view! { <app::App config=config.clone() /> });
}
