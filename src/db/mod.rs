use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::SecurityConfig;
use crate::domain::{AccountKey, DistrictField};

pub mod migrator;
pub mod repositories;

pub use repositories::complaint::{Complaint, NewComplaint};
pub use repositories::profile::ProfileRecord;
pub use repositories::user::{NewUser, User};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn profile_repo(&self) -> repositories::profile::ProfileRepository {
        repositories::profile::ProfileRepository::new(self.conn.clone())
    }

    fn complaint_repo(&self) -> repositories::complaint::ComplaintRepository {
        repositories::complaint::ComplaintRepository::new(self.conn.clone())
    }

    // ========== Complaint Repository Methods ==========

    pub async fn list_complaints_for_district(
        &self,
        field: DistrictField,
        key: &AccountKey,
    ) -> Result<Vec<Complaint>> {
        self.complaint_repo().list_for_district(field, key).await
    }

    pub async fn list_open_complaints(&self, key: &AccountKey) -> Result<Vec<Complaint>> {
        self.complaint_repo().list_open(key).await
    }

    pub async fn list_closed_complaints(&self, key: &AccountKey) -> Result<Vec<Complaint>> {
        self.complaint_repo().list_closed(key).await
    }

    pub async fn count_complaints_by_type(&self, key: &AccountKey) -> Result<Vec<(String, i64)>> {
        self.complaint_repo().count_by_type(key).await
    }

    pub async fn insert_complaint(&self, complaint: NewComplaint) -> Result<i64> {
        self.complaint_repo().insert(complaint).await
    }

    // ========== Profile Repository Methods ==========

    pub async fn get_profile_for_user(&self, user_id: i32) -> Result<Option<ProfileRecord>> {
        self.profile_repo().get_for_user(user_id).await
    }

    // ========== User Repository Methods ==========

    pub async fn create_user(&self, new_user: NewUser, config: &SecurityConfig) -> Result<User> {
        self.user_repo().create_with_profile(new_user, config).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn verify_user_password(&self, username: &str, password: &str) -> Result<Option<User>> {
        self.user_repo().verify_password(username, password).await
    }

    pub async fn verify_api_key(&self, api_key: &str) -> Result<Option<User>> {
        self.user_repo().verify_api_key(api_key).await
    }

    pub async fn get_user_api_key(&self, username: &str) -> Result<Option<String>> {
        self.user_repo().get_api_key(username).await
    }

    pub async fn regenerate_user_api_key(&self, username: &str) -> Result<String> {
        self.user_repo().regenerate_api_key(username).await
    }
}
