use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use promocode_factory_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

const ACTIVE_PARTNER: &str = "7d994823-8226-4273-b063-1a95f3cc1df8";
const INACTIVE_PARTNER: &str = "0da65561-cf56-4942-bff2-22f50cf70d43";
const UNKNOWN_PARTNER: &str = "def47943-7aaf-44a1-ae21-05aa4948b165";

async fn build_test_router() -> (TempDir, Router) {
    let tmp = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        seed_demo_data: true,
    };
    let state = build_state(&config).await.unwrap();
    (tmp, app_router(state, &config))
}

fn set_limit_request(partner_id: &str, limit: i32) -> Request<Body> {
    let body = json!({
        "endDate": (Utc::now() + chrono::Duration::days(1)).to_rfc3339(),
        "limit": limit,
    });
    Request::builder()
        .method(Method::POST)
        .uri(format!("/api/v1/partners/{}/limits", partner_id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn healthz_works() {
    let (_tmp, app) = build_test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn list_partners_returns_seeded_partners() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = get(&app, "/api/v1/partners").await;

    assert_eq!(status, StatusCode::OK);
    let partners = body.as_array().unwrap();
    assert_eq!(partners.len(), 4);
    let partner = partners
        .iter()
        .find(|p| p["id"] == ACTIVE_PARTNER)
        .unwrap();
    assert_eq!(partner["isActive"], true);
    assert_eq!(partner["partnerLimits"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn set_limit_creates_limit_and_cancels_previous() {
    let (_tmp, app) = build_test_router().await;

    let response = app
        .clone()
        .oneshot(set_limit_request(ACTIVE_PARTNER, 10))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let created: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(created["limit"], 10);
    assert!(created["cancelDate"].is_null());

    let (status, fetched) = get(&app, &location).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);

    let (_, partners) = get(&app, "/api/v1/partners").await;
    let partner = partners
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == ACTIVE_PARTNER)
        .unwrap();
    assert_eq!(partner["numberIssuedPromoCodes"], 0);
    let limits = partner["partnerLimits"].as_array().unwrap();
    assert_eq!(limits.len(), 2);
    assert!(!limits[0]["cancelDate"].is_null());
    assert_eq!(limits.iter().filter(|l| l["cancelDate"].is_null()).count(), 1);
}

#[tokio::test]
async fn set_limit_for_unknown_partner_returns_not_found() {
    let (_tmp, app) = build_test_router().await;

    let response = app
        .oneshot(set_limit_request(UNKNOWN_PARTNER, 10))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn set_limit_for_inactive_partner_returns_bad_request() {
    let (_tmp, app) = build_test_router().await;

    let response = app
        .oneshot(set_limit_request(INACTIVE_PARTNER, 10))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn set_non_positive_limit_returns_bad_request_and_keeps_partner() {
    let (_tmp, app) = build_test_router().await;

    let response = app
        .clone()
        .oneshot(set_limit_request(ACTIVE_PARTNER, 0))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (_, partners) = get(&app, "/api/v1/partners").await;
    let partner = partners
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == ACTIVE_PARTNER)
        .unwrap();
    assert_eq!(partner["numberIssuedPromoCodes"], 100);
    assert!(partner["partnerLimits"][0]["cancelDate"].is_null());
}

#[tokio::test]
async fn cancel_limit_returns_no_content() {
    let (_tmp, app) = build_test_router().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(format!("/api/v1/partners/{}/canceledLimits", ACTIVE_PARTNER))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (_, partners) = get(&app, "/api/v1/partners").await;
    let partner = partners
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == ACTIVE_PARTNER)
        .unwrap();
    assert!(!partner["partnerLimits"][0]["cancelDate"].is_null());
}
