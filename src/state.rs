use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, ComplaintService, ProfileService, SeaOrmAuthService, SeaOrmComplaintService,
    SeaOrmProfileService,
};

/// Everything a request handler or CLI command needs, built once at startup.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,

    pub profile_service: Arc<dyn ProfileService>,

    pub complaint_service: Arc<dyn ComplaintService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let auth_service =
            Arc::new(SeaOrmAuthService::new(store.clone())) as Arc<dyn AuthService + 'static>;

        let profile_service =
            Arc::new(SeaOrmProfileService::new(store.clone())) as Arc<dyn ProfileService + 'static>;

        let complaint_service = Arc::new(SeaOrmComplaintService::new(
            store.clone(),
            config.complaints.all_complaints_match,
        )) as Arc<dyn ComplaintService + 'static>;

        Self {
            config: Arc::new(config),
            store,
            auth_service,
            profile_service,
            complaint_service,
        }
    }
}
