use crate::entities::{prelude::*, user_profiles, users};
use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

/// A profile joined with the identity fields of its user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub district: String,
    pub party: String,
    pub borough: String,
}

impl ProfileRecord {
    fn from_models(profile: user_profiles::Model, user: users::Model) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            full_name: profile.full_name,
            district: profile.district,
            party: profile.party,
            borough: profile.borough,
        }
    }
}

pub struct ProfileRepository {
    conn: DatabaseConnection,
}

impl ProfileRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Returns the profile owned by `user_id`, lowest id first if several exist.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Option<ProfileRecord>> {
        let row = UserProfiles::find()
            .filter(user_profiles::Column::UserId.eq(user_id))
            .order_by_asc(user_profiles::Column::Id)
            .find_also_related(Users)
            .one(&self.conn)
            .await
            .context("Failed to query profile for user")?;

        Ok(row.and_then(|(profile, user)| {
            user.map(|user| ProfileRecord::from_models(profile, user))
        }))
    }
}
