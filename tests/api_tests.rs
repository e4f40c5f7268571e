mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use councildesk::entities::user_profiles;
use http_body_util::BodyExt;
use sea_orm::EntityTrait;
use tower::ServiceExt;

use common::{PASSWORD, body_json, spawn_app};

const PROTECTED: [&str; 6] = [
    "/api/complaints/allComplaints/",
    "/api/complaints/openCases/",
    "/api/complaints/closedCases/",
    "/api/complaints/topComplaints/",
    "/api/complaints/constituentComplaints/",
    "/api/complaints/profile/",
];

#[tokio::test]
async fn test_endpoints_require_authentication() {
    let app = spawn_app().await;
    app.create_user("alice", "7").await;

    for uri in PROTECTED {
        let response = app
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let app = spawn_app().await;
    app.create_user("alice", "7").await;

    for uri in PROTECTED {
        let response = app.get(uri, "not-a-real-token").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn test_token_header_variants() {
    let app = spawn_app().await;
    let token = app.create_user("alice", "7").await;

    for (header, value) in [
        ("Authorization", format!("Token {token}")),
        ("Authorization", format!("Bearer {token}")),
        ("X-Api-Key", token.clone()),
    ] {
        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/complaints/profile/")
                    .header(header, value)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{header}");
    }
}

#[tokio::test]
async fn test_profile_returns_callers_profile() {
    let app = spawn_app().await;
    let token = app.create_user("alice", "7").await;
    app.create_user("bob", "12").await;

    let body = app.get_json("/api/complaints/profile/", &token).await;

    assert_eq!(body["username"], "alice");
    assert_eq!(body["district"], "7");
    assert_eq!(body["full_name"], "Council Member Test");
    assert_eq!(body["party"], "Independent");
    assert_eq!(body["borough"], "Brooklyn");
    assert_eq!(body["first_name"], "Test");
    assert!(body["user_id"].is_i64());
}

#[tokio::test]
async fn test_missing_profile_is_not_found() {
    let app = spawn_app().await;
    let token = app.create_user("alice", "7").await;

    user_profiles::Entity::delete_many()
        .exec(&app.state.store().conn)
        .await
        .unwrap();

    let response = app.get("/api/complaints/profile/", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.get("/api/complaints/openCases/", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_district_is_conflict() {
    let app = spawn_app().await;
    let token = app.create_user("alice", "seven").await;

    let response = app.get("/api/complaints/allComplaints/", &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("alice"));

    // The profile itself is still readable.
    let response = app.get("/api/complaints/profile/", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_returns_token() {
    let app = spawn_app().await;
    let token = app.create_user("alice", "7").await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login/")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "username": "alice", "password": PASSWORD }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("set-cookie"));

    let body = body_json(response).await;
    assert_eq!(body["token"], token);
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let app = spawn_app().await;
    app.create_user("alice", "7").await;

    for (username, password) in [("alice", "wrong password"), ("nobody", PASSWORD)] {
        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login/")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        serde_json::json!({ "username": username, "password": password })
                            .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{username}");
    }
}

#[tokio::test]
async fn test_session_cookie_authenticates() {
    let app = spawn_app().await;
    app.create_user("alice", "7").await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login/")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "username": "alice", "password": PASSWORD }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    let cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .unwrap()
        .to_string();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/complaints/profile/")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/logout/")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/complaints/profile/")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = spawn_app().await;

    for (uri, status) in [("/api/health/live", "alive"), ("/api/health/ready", "ready")] {
        let response = app
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], status);
    }
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = spawn_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/health/live")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
}

#[tokio::test]
async fn test_metrics_requires_auth_and_recorder() {
    let app = spawn_app().await;
    let token = app.create_user("alice", "7").await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.get("/api/metrics", &token).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = spawn_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/health/live")
                .header("x-request-id", "trace-me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-me");
}

#[tokio::test]
async fn test_unmatched_paths_share_one_metrics_label() {
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    // Current-thread runtime, so the thread-local recorder sees every request.
    let _guard = metrics::set_default_local_recorder(&recorder);

    let app = common::spawn_app_with_metrics(handle).await;
    let token = app.create_user("alice", "7").await;

    for uri in ["/random-a1b2c3", "/random-d4e5f6", "/api/health/live"] {
        app.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
    }

    let response = app.get("/api/metrics", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let rendered = String::from_utf8(body.to_vec()).unwrap();

    assert!(rendered.contains(r#"path="unmatched""#), "{rendered}");
    assert!(!rendered.contains("random-a1b2c3"), "{rendered}");
    assert!(!rendered.contains("random-d4e5f6"), "{rendered}");
}
