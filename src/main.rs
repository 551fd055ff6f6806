//! Todo Frontend Entry Point

mod actions;
mod app;
mod components;
mod config;
mod context;
mod logging;
mod store;
mod todo_list;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = logging::init(config.log_level) {
        web_sys::console::error_1(&format!("logger already set: {}", e).into());
    }
    log::info!("[APP] Starting, backend at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
