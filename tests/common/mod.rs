#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::NaiveDate;
use councildesk::api::{self, AppState};
use councildesk::config::{Config, SecurityConfig};
use councildesk::db::{NewComplaint, NewUser, Store};
use councildesk::domain::DistrictField;
use councildesk::state::SharedState;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

pub const PASSWORD: &str = "correct horse battery";

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    db_path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

pub fn fast_hashing() -> SecurityConfig {
    SecurityConfig {
        argon2_memory_cost_kib: 1024,
        argon2_time_cost: 1,
        argon2_parallelism: 1,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(DistrictField::CouncilDist).await
}

pub async fn spawn_app_with(all_complaints_match: DistrictField) -> TestApp {
    build_app(all_complaints_match, None).await
}

pub async fn spawn_app_with_metrics(prometheus_handle: PrometheusHandle) -> TestApp {
    build_app(DistrictField::CouncilDist, Some(prometheus_handle)).await
}

/// A config pointing at a fresh temp-file database.
pub fn test_config() -> (Config, PathBuf) {
    let db_path =
        std::env::temp_dir().join(format!("councildesk-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.server.secure_cookies = false;
    config.security = fast_hashing();

    (config, db_path)
}

async fn build_app(
    all_complaints_match: DistrictField,
    prometheus_handle: Option<PrometheusHandle>,
) -> TestApp {
    let (mut config, db_path) = test_config();
    config.complaints.all_complaints_match = all_complaints_match;

    let store = Store::new(&config.general.database_path)
        .await
        .expect("Failed to open test database");
    let shared = Arc::new(SharedState::with_store(config, store));
    let state = api::create_app_state(shared, prometheus_handle);

    TestApp {
        router: api::router(state.clone()),
        state,
        db_path,
    }
}

impl TestApp {
    /// Creates a user with a profile in `district` and returns its API token.
    pub async fn create_user(&self, username: &str, district: &str) -> String {
        let user = self
            .state
            .store()
            .create_user(
                NewUser {
                    username: username.to_string(),
                    password: PASSWORD.to_string(),
                    first_name: "Test".to_string(),
                    last_name: "Staffer".to_string(),
                    full_name: "Council Member Test".to_string(),
                    district: district.to_string(),
                    party: "Independent".to_string(),
                    borough: "Brooklyn".to_string(),
                },
                &fast_hashing(),
            )
            .await
            .expect("Failed to create user");
        user.api_key
    }

    pub async fn insert(&self, complaint: NewComplaint) -> i64 {
        self.state
            .store()
            .insert_complaint(complaint)
            .await
            .expect("Failed to insert complaint")
    }

    pub async fn get(&self, uri: &str, token: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("Authorization", format!("Token {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn get_json(&self, uri: &str, token: &str) -> serde_json::Value {
        let response = self.get(uri, token).await;
        assert!(
            response.status().is_success(),
            "GET {uri} returned {}",
            response.status()
        );
        body_json(response).await
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// A complaint filed against `account`, optionally closed.
pub fn complaint(
    account: &str,
    complaint_type: &str,
    opendate: Option<NaiveDate>,
    closedate: Option<NaiveDate>,
) -> NewComplaint {
    NewComplaint {
        account: Some(account.to_string()),
        council_dist: Some(account.to_string()),
        complaint_type: Some(complaint_type.to_string()),
        opendate,
        closedate,
        borough: Some("BROOKLYN".to_string()),
        ..Default::default()
    }
}

pub fn keys(json: &serde_json::Value) -> Vec<i64> {
    json.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|c| c["unique_key"].as_i64().unwrap())
        .collect()
}
