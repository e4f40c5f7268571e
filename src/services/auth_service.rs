//! Domain service for authentication.
//!
//! Handles credential checks for the login endpoint and resolves API tokens and
//! session usernames into a [`CurrentUser`].

use serde::Serialize;
use thiserror::Error;

use crate::domain::CurrentUser;

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Login result containing the token the client sends on later requests.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub user_id: i32,
    pub username: String,
    pub token: String,
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials and returns the user's token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] for empty input and
    /// [`AuthError::InvalidCredentials`] if the username or password is wrong.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AuthError>;

    /// Resolves an API token to its user.
    async fn verify_token(&self, token: &str) -> Result<Option<CurrentUser>, AuthError>;

    /// Resolves the username stored in a session to its user.
    async fn session_user(&self, username: &str) -> Result<Option<CurrentUser>, AuthError>;

    /// Gets the current API token for a user.
    async fn get_token(&self, username: &str) -> Result<String, AuthError>;

    /// Replaces a user's API token and returns the new one.
    async fn rotate_token(&self, username: &str) -> Result<String, AuthError>;
}
