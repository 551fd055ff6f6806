//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;
use todo_api::HttpTodoApi;

use crate::config::AppConfig;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Backend client
    pub api: HttpTodoApi,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            api: HttpTodoApi::new(&config.api_base_url),
            config,
        }
    }
}

/// Get the app context, panicking if the root view did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Shorthand for the backend client
pub fn use_api() -> HttpTodoApi {
    use_app_context().api
}
