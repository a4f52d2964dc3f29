use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::ApiConfig;
use crate::domain::logging::LogComponent;
use crate::infrastructure::http::ApiClient;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Browser entry point: wire logging, resolve the backend, mount the root view
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::for_build()));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    let config = ApiConfig::from_environment();
    log_info!(
        LogComponent::Application("Initialize"),
        "🚀 CoinMe dashboard starting against {}",
        config.base_url()
    );

    let client = ApiClient::browser(config);
    mount_to_body(move || view! { <App client=client.clone() /> });
}
