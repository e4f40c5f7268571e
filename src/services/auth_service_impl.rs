//! `SeaORM` implementation of the `AuthService` trait.

use crate::db::{Store, User};
use crate::domain::CurrentUser;
use crate::services::auth_service::{AuthError, AuthService, LoginResult};
use async_trait::async_trait;

pub struct SeaOrmAuthService {
    store: Store,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

fn current_user(user: User) -> CurrentUser {
    CurrentUser {
        id: user.id,
        username: user.username,
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AuthError> {
        if username.is_empty() {
            return Err(AuthError::Validation("Username is required".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::Validation("Password is required".to_string()));
        }

        let user = self
            .store
            .verify_user_password(username, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(LoginResult {
            user_id: user.id,
            username: user.username,
            token: user.api_key,
        })
    }

    async fn verify_token(&self, token: &str) -> Result<Option<CurrentUser>, AuthError> {
        if token.is_empty() {
            return Ok(None);
        }
        let user = self.store.verify_api_key(token).await?;
        Ok(user.map(current_user))
    }

    async fn session_user(&self, username: &str) -> Result<Option<CurrentUser>, AuthError> {
        let user = self.store.get_user_by_username(username).await?;
        Ok(user.map(current_user))
    }

    async fn get_token(&self, username: &str) -> Result<String, AuthError> {
        self.store
            .get_user_api_key(username)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(username.to_string()))
    }

    async fn rotate_token(&self, username: &str) -> Result<String, AuthError> {
        if self.store.get_user_by_username(username).await?.is_none() {
            return Err(AuthError::UserNotFound(username.to_string()));
        }

        let token = self.store.regenerate_user_api_key(username).await?;
        tracing::info!(username, "API token rotated");
        Ok(token)
    }
}
