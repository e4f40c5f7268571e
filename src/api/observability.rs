use axum::{
    extract::{MatchedPath, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use super::{ApiError, AppState};

static REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Label used for requests that hit no route.
const UNMATCHED_ROUTE: &str = "unmatched";

/// GET /metrics
/// Prometheus text exposition. 503 when the recorder is disabled.
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    state
        .prometheus_handle
        .as_ref()
        .map(metrics_exporter_prometheus::PrometheusHandle::render)
        .ok_or_else(|| {
            ApiError::ServiceUnavailable(
                "Metrics are disabled (observability.metrics_enabled = false)".to_string(),
            )
        })
}

fn outcome(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "error"
    } else if status.is_client_error() {
        "client_error"
    } else {
        "success"
    }
}

/// Wraps every request in a span carrying a request id, records the request
/// counters and emits one summary line when the response is ready.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get(&REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), ToString::to_string);

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        route = route.as_deref().unwrap_or(UNMATCHED_ROUTE),
        user_id = tracing::field::Empty,
    );

    async move {
        let mut response = next.run(req).await;
        let status = response.status();
        let elapsed = start.elapsed();

        let labels = [
            ("method", method.to_string()),
            ("path", route.unwrap_or_else(|| UNMATCHED_ROUTE.to_string())),
            ("status", status.as_u16().to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(elapsed.as_secs_f64());

        let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        if status.is_server_error() {
            warn!(
                status_code = status.as_u16(),
                duration_ms,
                outcome = outcome(status),
                "Request failed"
            );
        } else {
            info!(
                status_code = status.as_u16(),
                duration_ms,
                outcome = outcome(status),
                "Request finished"
            );
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID.clone(), value);
        }

        response
    }
    .instrument(span)
    .await
}

/// Complaint data is personal, so responses are never cached or framed.
pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));
    headers.insert("cache-control", HeaderValue::from_static("no-store"));

    response
}
