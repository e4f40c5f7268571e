use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::services::{AuthService, ComplaintService, ProfileService};
use crate::state::SharedState;

pub mod auth;
mod complaints;
mod error;
mod health;
mod observability;
mod profile;
pub mod types;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn auth_service(&self) -> &Arc<dyn AuthService> {
        &self.shared.auth_service
    }

    #[must_use]
    pub fn profile_service(&self) -> &Arc<dyn ProfileService> {
        &self.shared.profile_service
    }

    #[must_use]
    pub fn complaint_service(&self) -> &Arc<dyn ComplaintService> {
        &self.shared.complaint_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    let server = state.config().server.clone();

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(server.secure_cookies)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            server.session_inactivity_minutes,
        )));

    let api_router = Router::new()
        .merge(create_protected_router(state.clone()))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready));

    let app = Router::new()
        .nest("/api", api_router)
        .route("/login/", post(auth::login))
        .route("/logout/", post(auth::logout))
        .layer(session_layer)
        .with_state(state);

    let cors_layer = if server.cors_allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = server
            .cors_allowed_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    app.layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn create_protected_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let auth_layer = middleware::from_fn_with_state(state, auth::auth_middleware);

    let complaint_routes = Router::new()
        .route("/allComplaints/", get(complaints::all_complaints))
        .route("/openCases/", get(complaints::open_cases))
        .route("/closedCases/", get(complaints::closed_cases))
        .route("/topComplaints/", get(complaints::top_complaints))
        .route(
            "/constituentComplaints/",
            get(complaints::constituent_complaints),
        )
        .route("/profile/", get(profile::get_profile))
        .route_layer(auth_layer.clone());

    Router::new().nest("/complaints", complaint_routes).route(
        "/metrics",
        get(observability::get_metrics).route_layer(auth_layer),
    )
}
