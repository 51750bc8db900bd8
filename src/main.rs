//! TaskFlow Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod logging;
mod markdown;
mod models;
mod moves;
mod notify;
mod pages;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::from_env();
    logging::init(config.log_level);
    log::info!("starting, api={}", config.api_base_url);
    mount_to_body(move || view! { <App config=config /> });
}
