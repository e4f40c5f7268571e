//! Domain service resolving a caller to their profile and district scope.

use thiserror::Error;

use crate::db::ProfileRecord;
use crate::domain::{CurrentUser, DistrictError, DistrictScope};

/// Errors specific to profile operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("No profile exists for user '{0}'")]
    NotFound(String),

    #[error("Profile district for user '{username}' is invalid: {source}")]
    InvalidDistrict {
        username: String,
        #[source]
        source: DistrictError,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for ProfileError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ProfileError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for profiles.
#[async_trait::async_trait]
pub trait ProfileService: Send + Sync {
    /// Returns the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotFound`] if the user has no profile.
    async fn get_profile(&self, user: &CurrentUser) -> Result<ProfileRecord, ProfileError>;

    /// Builds the district scope complaint queries run under.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidDistrict`] if the profile's district is
    /// not one or two digits.
    async fn resolve_scope(&self, user: &CurrentUser) -> Result<DistrictScope, ProfileError>;
}
