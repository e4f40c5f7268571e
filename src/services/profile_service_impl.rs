//! `SeaORM` implementation of the `ProfileService` trait.

use crate::db::{ProfileRecord, Store};
use crate::domain::{AccountKey, CurrentUser, DistrictScope};
use crate::services::profile_service::{ProfileError, ProfileService};
use async_trait::async_trait;

pub struct SeaOrmProfileService {
    store: Store,
}

impl SeaOrmProfileService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileService for SeaOrmProfileService {
    async fn get_profile(&self, user: &CurrentUser) -> Result<ProfileRecord, ProfileError> {
        self.store
            .get_profile_for_user(user.id)
            .await?
            .ok_or_else(|| ProfileError::NotFound(user.username.clone()))
    }

    async fn resolve_scope(&self, user: &CurrentUser) -> Result<DistrictScope, ProfileError> {
        let profile = self.get_profile(user).await?;

        let account_key = AccountKey::from_district(&profile.district).map_err(|source| {
            tracing::warn!(
                user_id = user.id,
                district = %profile.district,
                "Profile has a malformed district"
            );
            ProfileError::InvalidDistrict {
                username: user.username.clone(),
                source,
            }
        })?;

        Ok(DistrictScope::new(user.id, account_key))
    }
}
