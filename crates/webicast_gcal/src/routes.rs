// --- File: crates/webicast_gcal/src/routes.rs ---

use crate::handlers::{
    auth_callback_handler, auth_status_handler, google_auth_handler, schedule_google_meet_handler,
    GcalState,
};
use axum::{
    routing::{get, post},
    Router,
};
use tracing::{info, warn};

use crate::auth::create_calendar_hub;
use std::sync::Arc;
use webicast_config::AppConfig;

/// Builds the shared GCal state once at startup.
///
/// The Calendar hub is only constructed when a refresh token is present;
/// otherwise the provisioner stays in demo mode.
pub async fn build_state(config: Arc<AppConfig>) -> Arc<GcalState> {
    let calendar_hub = match config.gcal.as_ref() {
        Some(gcal) if gcal.has_refresh_token() => match create_calendar_hub(gcal).await {
            Ok(hub) => {
                info!("Google Calendar hub initialized; real meetings enabled");
                Some(Arc::new(hub))
            }
            Err(err) => {
                warn!(
                    error = %err,
                    "Failed to initialize Google Calendar hub; running in demo mode"
                );
                None
            }
        },
        _ => {
            info!("No Google refresh token configured; running in demo mode");
            None
        }
    };

    Arc::new(GcalState {
        config,
        calendar_hub,
    })
}

/// Creates a router containing the scheduling routes for the Google Meet
/// feature. Nested under `/api` by the backend.
pub fn routes(state: Arc<GcalState>) -> Router {
    Router::new()
        .route("/schedule-google-meet", post(schedule_google_meet_handler))
        .with_state(state)
}

/// Creates a router for the OAuth consent flow. Mounted at the root
/// (not under `/api`) because the redirect URI registered with Google
/// points at `/auth/callback`.
pub fn auth_routes(state: Arc<GcalState>) -> Router {
    Router::new()
        .route("/auth/google", get(google_auth_handler))
        .route("/auth/callback", get(auth_callback_handler))
        .route("/auth/status", get(auth_status_handler))
        .with_state(state)
}
