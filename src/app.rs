//! Todo Frontend App
//!
//! Root view: probes backend health once and only then shows the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_api::{ApiError, HealthStatus, TodoApi};

use crate::components::{Frame, TodoView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::TodoState;

/// Outcome of the startup health check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthState {
    Checking,
    Healthy,
    Unhealthy,
}

impl HealthState {
    /// Healthy only for an OK response carrying exactly `expected`
    pub fn from_check(result: Result<HealthStatus, ApiError>, expected: &str) -> Self {
        match result {
            Ok(status) if status.is(expected) => HealthState::Healthy,
            Ok(status) => {
                log::error!("[APP] Response data was not as expected: {:?}", status);
                HealthState::Unhealthy
            }
            Err(e) => {
                log::error!("[APP] Health check failed: {}", e);
                HealthState::Unhealthy
            }
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    let api = ctx.api.clone();
    let expected = ctx.config.healthy_message.clone();
    provide_context(ctx);
    provide_context(Store::new(TodoState::new()));

    let (health, set_health) = signal(HealthState::Checking);

    // One-time health check on mount
    Effect::new(move |_| {
        let api = api.clone();
        let expected = expected.clone();
        spawn_local(async move {
            let state = HealthState::from_check(api.health().await, &expected);
            log::info!("[APP] Backend health: {:?}", state);
            set_health.set(state);
        });
    });

    view! {
        {move || match health.get() {
            HealthState::Healthy => view! {
                <div class="app-layout">
                    <Frame>
                        <h1 class="app-title">"Todo with a Rust Backend!"</h1>
                        <h1 class="app-subtitle">"Todos:"</h1>
                        <TodoView />
                    </Frame>
                </div>
            }.into_any(),
            HealthState::Checking => view! {
                <p class="health-pending">"Checking API..."</p>
            }.into_any(),
            HealthState::Unhealthy => view! {
                <h1 class="health-error">"Error within the API"</h1>
            }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK: &str = "Everything is working fine";

    #[test]
    fn test_matching_message_is_healthy() {
        let status = HealthStatus { message: Some(OK.to_string()) };
        assert_eq!(HealthState::from_check(Ok(status), OK), HealthState::Healthy);
    }

    #[test]
    fn test_other_message_is_unhealthy() {
        let status = HealthStatus { message: Some("Degraded".to_string()) };
        assert_eq!(HealthState::from_check(Ok(status), OK), HealthState::Unhealthy);
    }

    #[test]
    fn test_missing_message_is_unhealthy() {
        assert_eq!(
            HealthState::from_check(Ok(HealthStatus::default()), OK),
            HealthState::Unhealthy
        );
    }

    #[test]
    fn test_error_status_is_unhealthy() {
        let err = ApiError::Status {
            method: "GET",
            url: "http://127.0.0.1:8080/health".into(),
            status: 503,
        };
        assert_eq!(HealthState::from_check(Err(err), OK), HealthState::Unhealthy);
    }
}
