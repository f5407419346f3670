// File: services/webicast_backend/src/handlers.rs
use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use webicast_config::AppConfig;

/// Health and configuration-introspection routes.
pub fn api_routes(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/test-config", get(test_config_handler))
        .with_state(config)
}

#[axum::debug_handler]
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "OK", "message": "Webinar server is running" }))
}

/// Reports whether email is configured without exposing the credentials.
#[axum::debug_handler]
async fn test_config_handler(State(config): State<Arc<AppConfig>>) -> Json<Value> {
    let (configured, host, port) = match config.smtp.as_ref() {
        Some(smtp) => (smtp.is_configured(), smtp.host.clone(), smtp.port),
        None => (false, "smtp.gmail.com".to_string(), 587),
    };

    Json(json!({
        "emailConfigured": configured,
        "emailUser": if configured { "***configured***" } else { "not set" },
        "emailHost": host,
        "emailPort": port,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use webicast_config::SmtpConfig;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = api_routes(Arc::new(AppConfig::default()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "OK");
    }

    #[tokio::test]
    async fn test_config_masks_credentials() {
        let config = AppConfig {
            smtp: Some(SmtpConfig {
                user: Some("mailer@example.com".into()),
                pass: Some("app-password".into()),
                ..SmtpConfig::default()
            }),
            ..AppConfig::default()
        };
        let app = api_routes(Arc::new(config));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/test-config")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["emailConfigured"], true);
        assert_eq!(json["emailUser"], "***configured***");
        assert_eq!(json["emailHost"], "smtp.gmail.com");
        assert_eq!(json["emailPort"], 587);
        // The actual address never appears
        assert!(!json.to_string().contains("mailer@example.com"));
    }

    #[tokio::test]
    async fn test_config_without_smtp_section() {
        let app = api_routes(Arc::new(AppConfig::default()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/test-config")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["emailConfigured"], false);
        assert_eq!(json["emailUser"], "not set");
    }
}
