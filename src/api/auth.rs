use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_sessions::Session;

use super::{ApiError, AppState};
use crate::constants::auth::{API_KEY_HEADER, BEARER_SCHEME, SESSION_USER_KEY, TOKEN_SCHEME};
use crate::domain::CurrentUser;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

// ============================================================================
// Middleware
// ============================================================================

/// Authentication middleware that checks:
/// 1. Session cookie (from login)
/// 2. `Authorization: Token <key>` header
/// 3. `Authorization: Bearer <key>` header
/// 4. `X-Api-Key` header
///
/// On success the resolved [`CurrentUser`] is added to the request extensions.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(user) = authenticate(&state, &headers, &session).await? else {
        return Err(ApiError::unauthorized(
            "Authentication credentials were not provided or are invalid",
        ));
    };

    tracing::Span::current().record("user_id", user.id);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
    session: &Session,
) -> Result<Option<CurrentUser>, ApiError> {
    // Check session first (fastest path for the web UI)
    if let Ok(Some(username)) = session.get::<String>(SESSION_USER_KEY).await
        && let Some(user) = state.auth_service().session_user(&username).await?
    {
        return Ok(Some(user));
    }

    if let Some(token) = extract_token(headers) {
        return Ok(state.auth_service().verify_token(&token).await?);
    }

    Ok(None)
}

/// Extract an API token from the request headers
fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(auth_header) = headers.get(AUTHORIZATION)
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str
            .strip_prefix(TOKEN_SCHEME)
            .or_else(|| auth_str.strip_prefix(BEARER_SCHEME))
    {
        return Some(token.trim().to_string());
    }

    if let Some(api_key) = headers.get(API_KEY_HEADER)
        && let Ok(key_str) = api_key.to_str()
    {
        return Some(key_str.trim().to_string());
    }

    None
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /login/
/// Authenticate with username and password, returns the API token on success
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state
        .auth_service()
        .login(&payload.username, &payload.password)
        .await?;

    session
        .insert(SESSION_USER_KEY, &result.username)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to create session: {e}")))?;

    tracing::info!(user_id = result.user_id, "User logged in");

    Ok(Json(LoginResponse {
        token: result.token,
        username: result.username,
    }))
}

/// POST /logout/
/// Invalidate the current session
pub async fn logout(session: Session) -> impl IntoResponse {
    if let Err(e) = session.flush().await {
        tracing::warn!("Failed to flush session: {e}");
    }
    (StatusCode::OK, "Logged out")
}
