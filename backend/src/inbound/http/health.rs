//! Liveness and readiness probes.
//!
//! Both probes answer with a small JSON body and `Cache-Control: no-store`.
//! Readiness flips once the listener is bound; liveness drops when the
//! process starts draining.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use serde::Serialize;

/// Shared probe state.
#[derive(Debug)]
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

#[derive(Serialize)]
struct ProbeBody {
    status: &'static str,
}

impl HealthState {
    /// Start live but not yet ready.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready to take traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness so orchestrators stop routing during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether readiness has been signalled.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether the process still reports itself alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let (mut builder, status) = if probe_ok {
            (HttpResponse::Ok(), "ok")
        } else {
            (HttpResponse::ServiceUnavailable(), "unavailable")
        };
        builder
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(ProbeBody { status })
    }
}

/// Readiness probe: 200 once the server accepts traffic, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe: 200 while alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn probe(state: HealthState, uri: &str) -> (StatusCode, Option<String>, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(ready)
                .service(live),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = res.status();
        let cache = res
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body: Value = test::read_body_json(res).await;
        (status, cache, body)
    }

    #[rstest]
    #[case(false, StatusCode::SERVICE_UNAVAILABLE, "unavailable")]
    #[case(true, StatusCode::OK, "ok")]
    #[actix_web::test]
    async fn readiness_follows_state(
        #[case] is_ready: bool,
        #[case] expected: StatusCode,
        #[case] label: &str,
    ) {
        let state = HealthState::new();
        if is_ready {
            state.mark_ready();
        }
        let (status, cache, body) = probe(state, "/health/ready").await;
        assert_eq!(status, expected);
        assert_eq!(cache.as_deref(), Some("no-store"));
        assert_eq!(body, json!({"status": label}));
    }

    #[actix_web::test]
    async fn liveness_fails_once_unhealthy() {
        let state = HealthState::new();
        state.mark_unhealthy();
        let (status, _, body) = probe(state, "/health/live").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({"status": "unavailable"}));
    }

    #[actix_web::test]
    async fn liveness_passes_by_default() {
        let (status, _, _) = probe(HealthState::new(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }
}
