// --- File: crates/webicast_mailer/src/routes.rs ---

use crate::handlers::{send_notifications_handler, MailerState};
use axum::{routing::post, Router};
use std::sync::Arc;
use webicast_config::AppConfig;

/// Creates a router containing the notification routes. Nested under
/// `/api` by the backend.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(MailerState { config });
    Router::new()
        .route("/send-notifications", post(send_notifications_handler))
        .with_state(state)
}
