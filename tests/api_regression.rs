//! API Regression Tests
//!
//! In-process tests that build the Axum router via `build_router()` over the
//! in-memory store and exercise every /api/* endpoint using
//! `tower::ServiceExt::oneshot()`. No database, no network port.

use well_api::server::api::build_router;
use well_api::server::config::ServiceConfig;
use well_api::server::AppState;
use well_api::InMemoryWellStore;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_app() -> Router {
    create_app_with(ServiceConfig::default())
}

fn create_app_with(config: ServiceConfig) -> Router {
    let state = AppState::new(Arc::new(InMemoryWellStore::new()), config);
    build_router(state)
}

async fn call(app: &Router, method: &str, params: Value) -> (StatusCode, Value) {
    let body = json!({ "method": method, "params": params });
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/{method}"))
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn line_well(name: &str) -> Value {
    json!({
        "name": name,
        "head": [0.0, 0.0],
        "MD": [0.0, 10.0],
        "X": [0.0, 10.0],
        "Y": [0.0, 0.0],
        "Z": [0.0, 0.0]
    })
}

async fn create_line_well(app: &Router, name: &str) -> String {
    let (status, v) = call(app, "well.create", line_well(name)).await;
    assert_eq!(status, StatusCode::OK, "create failed: {v}");
    v["data"]["uuid"].as_str().unwrap().to_string()
}

/// well.create returns a uuid inside the envelope.
#[tokio::test]
async fn test_create_returns_uuid() {
    let app = create_app();
    let (status, v) = call(&app, "well.create", line_well("W-CREATE")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(v["error"].is_null());
    let uuid = v["data"]["uuid"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(uuid).is_ok());
}

/// Integer JSON numbers are accepted for float arrays.
#[tokio::test]
async fn test_create_accepts_integer_numbers() {
    let app = create_app();
    let params = json!({
        "name": "W-INT",
        "head": [1, 2],
        "MD": [0, 5],
        "X": [1, 2],
        "Y": [2, 3],
        "Z": [0, -5]
    });
    let (status, _) = call(&app, "well.create", params).await;
    assert_eq!(status, StatusCode::OK);
}

/// well.get round-trips the trajectory when asked to.
#[tokio::test]
async fn test_get_round_trip() {
    let app = create_app();
    let uuid = create_line_well(&app, "W-GET").await;

    let (status, v) = call(&app, "well.get", json!({"uuid": uuid, "return_trajectory": true})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["name"], "W-GET");
    assert_eq!(v["data"]["head"], json!([0.0, 0.0]));
    assert_eq!(v["data"]["MD"], json!([0.0, 10.0]));
    assert_eq!(v["data"]["X"], json!([0.0, 10.0]));
    assert_eq!(v["data"]["Y"], json!([0.0, 0.0]));
    assert_eq!(v["data"]["Z"], json!([0.0, 0.0]));

    let (_, v) = call(&app, "well.get", json!({"uuid": uuid})).await;
    assert_eq!(v["data"]["name"], "W-GET");
    assert!(v["data"].get("MD").is_none());
}

/// well.at interpolates between stations.
#[tokio::test]
async fn test_at_interpolates() {
    let app = create_app();
    let uuid = create_line_well(&app, "W-AT").await;

    let (status, v) = call(&app, "well.at", json!({"uuid": uuid, "MD": 5.0})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"], json!({"X": 5.0, "Y": 0.0, "Z": 0.0}));

    let (_, v) = call(&app, "well.at", json!({"uuid": uuid, "MD": 50.0})).await;
    assert_eq!(v["data"], json!({"X": 10.0, "Y": 0.0, "Z": 0.0}));
}

/// Duplicate names are rejected with a conflict.
#[tokio::test]
async fn test_duplicate_name() {
    let app = create_app();
    let first = create_line_well(&app, "W-DUP").await;

    let (status, v) = call(&app, "well.create", line_well("W-DUP")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(v["data"].is_null());
    assert_eq!(v["error"]["message"], "Well already exists!");

    let (status, _) = call(&app, "well.get", json!({"uuid": first})).await;
    assert_eq!(status, StatusCode::OK);
}

/// Validation failures use the envelope and persist nothing.
#[tokio::test]
async fn test_validation_errors() {
    let app = create_app();

    let mut params = line_well("W-SIZE");
    params["X"] = json!([0.0]);
    let (status, v) = call(&app, "well.create", params).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(v["error"]["message"], "Sizes of MD, X, Y and Z must be equal and non-zero!");

    let mut params = line_well("W-HEAD");
    params["head"] = json!([1.0, 1.0]);
    let (status, v) = call(&app, "well.create", params).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(v["error"]["message"], "Well head and trajectory are inconsistent!");

    // Neither name was taken
    create_line_well(&app, "W-SIZE").await;
    create_line_well(&app, "W-HEAD").await;
}

/// Decreasing MD is rejected with the envelope and persists nothing.
#[tokio::test]
async fn test_decreasing_md_rejected() {
    let app = create_app();
    let mut params = line_well("W-MONO");
    params["MD"] = json!([0.0, 10.0, 5.0]);
    params["X"] = json!([0.0, 10.0, 5.0]);
    params["Y"] = json!([0.0, 0.0, 0.0]);
    params["Z"] = json!([0.0, 0.0, 0.0]);

    let (status, v) = call(&app, "well.create", params).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(v["data"].is_null());
    assert!(v["error"]["message"].as_str().unwrap().contains("MD[2]"));

    create_line_well(&app, "W-MONO").await;
}

/// A name with a control character is rejected before reaching the store.
#[tokio::test]
async fn test_control_character_name_rejected() {
    let app = create_app();
    let (status, v) = call(&app, "well.create", line_well("W\u{0}NUL")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(v["data"].is_null());
    assert!(v["error"]["message"].is_string());
}

/// A body over the configured limit still gets the envelope.
#[tokio::test]
async fn test_oversized_body_rejected_with_envelope() {
    let app = create_app_with(ServiceConfig {
        max_body_bytes: 1024,
        ..ServiceConfig::default()
    });

    let n: u32 = 200;
    let params = json!({
        "name": "W-BIG",
        "head": [0.0, 0.0],
        "MD": (0..n).map(f64::from).collect::<Vec<_>>(),
        "X": vec![0.0; n as usize],
        "Y": vec![0.0; n as usize],
        "Z": vec![0.0; n as usize],
    });
    let (status, v) = call(&app, "well.create", params).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(v["data"].is_null());
    assert!(v["error"]["message"].is_string());

    let (status, _) = call(&app, "well.create", line_well("W-SMALL")).await;
    assert_eq!(status, StatusCode::OK);
}

/// An empty name is rejected before reaching the store.
#[tokio::test]
async fn test_empty_name_rejected() {
    let app = create_app();
    let (status, v) = call(&app, "well.create", line_well("")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(v["data"].is_null());
    assert!(v["error"]["message"].is_string());
}

/// Malformed params keep the envelope shape.
#[tokio::test]
async fn test_malformed_params() {
    let app = create_app();
    let (status, v) = call(&app, "well.at", json!({"uuid": "not-a-uuid", "MD": 1.0})).await;
    assert!(status.is_client_error());
    assert!(v["data"].is_null());
    assert!(v["error"]["message"].is_string());

    let (status, v) = call(&app, "well.create", json!({"name": "W"})).await;
    assert!(status.is_client_error());
    assert!(v["error"]["message"].is_string());
}

/// remove, then get/at/remove are all not-found.
#[tokio::test]
async fn test_remove_lifecycle() {
    let app = create_app();
    let uuid = create_line_well(&app, "W-RM").await;

    let (status, v) = call(&app, "well.remove", json!({"uuid": uuid})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"], json!({}));
    assert!(v["error"].is_null());

    for (method, params) in [
        ("well.get", json!({"uuid": uuid})),
        ("well.at", json!({"uuid": uuid, "MD": 1.0})),
        ("well.remove", json!({"uuid": uuid})),
    ] {
        let (status, v) = call(&app, method, params).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(v["error"]["message"], "Well not found!");
    }
}

/// Unknown ids are not-found.
#[tokio::test]
async fn test_unknown_id() {
    let app = create_app();
    let id = uuid::Uuid::new_v4().to_string();
    let (status, v) = call(&app, "well.get", json!({"uuid": id, "return_trajectory": true})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["error"]["message"], "Well not found!");
}

/// /api/health reports the in-memory backend.
#[tokio::test]
async fn test_health() {
    let app = create_app();
    let resp = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["store"], "memory");
    assert_eq!(json["store_reachable"], true);
}
