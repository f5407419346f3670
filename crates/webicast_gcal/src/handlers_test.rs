// --- File: crates/webicast_gcal/src/handlers_test.rs ---
use crate::handlers::GcalState;
use crate::routes::routes;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;
use webicast_config::AppConfig;

fn app(use_gcal: bool) -> axum::Router {
    let config = AppConfig {
        use_gcal,
        ..AppConfig::default()
    };
    routes(Arc::new(GcalState {
        config: Arc::new(config),
        calendar_hub: None,
    }))
}

async fn post_schedule(app: axum::Router, body: serde_json::Value) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/schedule-google-meet")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn disabled_service_rejects_with_503() {
    let (status, body) = post_schedule(
        app(false),
        serde_json::json!({ "webinar": { "webinarId": "WEB-001" } }),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, "GCal service is disabled.");
}

#[tokio::test]
async fn incomplete_record_rejects_with_400() {
    let (status, body) = post_schedule(
        app(true),
        serde_json::json!({ "webinar": { "webinarId": "WEB-001", "name": "Demo" } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Validation error:"), "body: {body}");
    assert!(body.contains("date"));
    assert!(body.contains("presenter.email"));
}
