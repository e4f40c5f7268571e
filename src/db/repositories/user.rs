use anyhow::{Context, Result};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait,
    sea_query::Expr,
};
use tokio::task;

use crate::config::SecurityConfig;
use crate::entities::{prelude::*, user_profiles, users};

/// User data returned from repository (without sensitive password hash)
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub api_key: String,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            api_key: model.api_key,
        }
    }
}

/// Input for creating a staff account together with its profile.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub district: String,
    pub party: String,
    pub borough: String,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user by username")?;

        Ok(user.map(User::from))
    }

    /// Creates the user row and its profile in one transaction.
    pub async fn create_with_profile(
        &self,
        new_user: NewUser,
        config: &SecurityConfig,
    ) -> Result<User> {
        let password = new_user.password.clone();
        let config = config.clone();
        let password_hash = task::spawn_blocking(move || hash_password(&password, &config))
            .await
            .context("Password hashing task panicked")??;

        let now = chrono::Utc::now().to_rfc3339();
        let txn = self.conn.begin().await?;

        let inserted = Users::insert(users::ActiveModel {
            username: Set(new_user.username.clone()),
            first_name: Set(new_user.first_name),
            last_name: Set(new_user.last_name),
            password_hash: Set(password_hash),
            api_key: Set(generate_api_key()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&txn)
        .await
        .with_context(|| format!("Failed to insert user {}", new_user.username))?;

        let user_id = inserted.last_insert_id;

        UserProfiles::insert(user_profiles::ActiveModel {
            user_id: Set(user_id),
            full_name: Set(new_user.full_name),
            district: Set(new_user.district),
            party: Set(new_user.party),
            borough: Set(new_user.borough),
            ..Default::default()
        })
        .exec(&txn)
        .await
        .context("Failed to insert user profile")?;

        let user = Users::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to retrieve created user"))?;

        txn.commit().await?;
        Ok(User::from(user))
    }

    /// Verify password for a user, returning the user on success.
    /// Argon2 is CPU-intensive, so verification runs on a blocking thread.
    pub async fn verify_password(&self, username: &str, password: &str) -> Result<Option<User>> {
        let user = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user for password verification")?;

        let Some(user) = user else {
            return Ok(None);
        };

        let password_hash = user.password_hash.clone();
        let password = password.to_string();

        let is_valid = task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash)
                .map_err(|e| anyhow::anyhow!("Invalid password hash format: {e}"))?;

            Ok::<bool, anyhow::Error>(
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok(),
            )
        })
        .await
        .context("Password verification task panicked")??;

        Ok(is_valid.then(|| User::from(user)))
    }

    /// Verify API key and return the associated user
    pub async fn verify_api_key(&self, api_key: &str) -> Result<Option<User>> {
        let user = Users::find()
            .filter(users::Column::ApiKey.eq(api_key))
            .one(&self.conn)
            .await
            .context("Failed to query user by API key")?;

        Ok(user.map(User::from))
    }

    pub async fn get_api_key(&self, username: &str) -> Result<Option<String>> {
        Ok(self.get_by_username(username).await?.map(|u| u.api_key))
    }

    /// Replaces the user's API token. Old tokens stop working immediately.
    pub async fn regenerate_api_key(&self, username: &str) -> Result<String> {
        let new_api_key = generate_api_key();

        let result = Users::update_many()
            .col_expr(users::Column::ApiKey, Expr::value(new_api_key.clone()))
            .col_expr(
                users::Column::UpdatedAt,
                Expr::value(chrono::Utc::now().to_rfc3339()),
            )
            .filter(users::Column::Username.eq(username))
            .exec(&self.conn)
            .await
            .context("Failed to rotate API key")?;

        if result.rows_affected == 0 {
            anyhow::bail!("User not found: {username}");
        }

        Ok(new_api_key)
    }
}

/// Argon2id hash in PHC string form, so verification reads its parameters
/// back from the stored hash.
pub fn hash_password(password: &str, config: &SecurityConfig) -> Result<String> {
    let params = Params::new(
        config.argon2_memory_cost_kib,
        config.argon2_time_cost,
        config.argon2_parallelism,
        None,
    )
    .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))?;

    let salt = SaltString::generate(&mut OsRng);
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))
}

/// Generate a random API key (64 character hex string)
#[must_use]
pub fn generate_api_key() -> String {
    use rand::Rng;

    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();

    bytes.iter().fold(String::with_capacity(64), |mut acc, b| {
        use std::fmt::Write;
        let _ = write!(acc, "{b:02x}");
        acc
    })
}
