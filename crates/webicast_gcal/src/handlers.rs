// File: crates/webicast_gcal/src/handlers.rs
use crate::logic::{provision_meeting, MeetingResult, ProvisionError};
use crate::oauth::{consent_url, exchange_code};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json, Redirect},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use webicast_common::{IntoHttpResponse, Webinar, WebicastError};
use webicast_config::AppConfig;

use crate::auth::HubType; // Import the Hub type alias

// Define shared state needed by GCal handlers
#[derive(Clone)]
pub struct GcalState {
    pub config: Arc<AppConfig>,
    /// Authenticated Calendar client; `None` means demo mode only.
    pub calendar_hub: Option<Arc<HubType>>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ScheduleRequest {
    pub webinar: Webinar,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub success: bool,
    pub message: String,
    /// "real" when a Calendar event was created, "demo" otherwise.
    pub mode: &'static str,
    #[serde(flatten)]
    pub meeting: MeetingResult,
}

/// Handler to schedule a Google Meet webinar.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/schedule-google-meet", // Path relative to /api
    request_body = ScheduleRequest,
    responses(
        (status = 200, description = "Meeting provisioned (real or demo)"),
        (status = 400, description = "Bad request (missing fields, malformed date/time)"),
        (status = 503, description = "GCal service disabled")
    ),
    tag = "GCal"
))]
pub async fn schedule_google_meet_handler(
    State(state): State<Arc<GcalState>>,
    Json(payload): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, (StatusCode, String)> {
    // Ensure GCal feature is enabled via runtime config
    if !state.config.use_gcal {
        return Err(WebicastError::ServiceDisabled("GCal").into_http_response());
    }

    let webinar = payload.webinar;
    webinar
        .validate_for_provisioning()
        .map_err(IntoHttpResponse::into_http_response)?;

    let outcome = provision_meeting(
        state.calendar_hub.as_deref(),
        state.config.gcal.as_ref(),
        &webinar,
    )
    .await
    .map_err(|e| match e {
        ProvisionError::TimeParse(_) => {
            WebicastError::ParseError(e.to_string()).into_http_response()
        }
    })?;

    info!(
        webinar_id = %webinar.webinar_id,
        mode = outcome.mode(),
        meeting_id = %outcome.result().meeting_id,
        "Google Meet webinar scheduled"
    );

    Ok(Json(ScheduleResponse {
        success: true,
        message: "Google Meet webinar scheduled successfully".to_string(),
        mode: outcome.mode(),
        meeting: outcome.into_result(),
    }))
}

// --- OAuth handlers ---

#[derive(Deserialize, Debug)]
pub struct AuthCallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Redirects the browser to the Google consent screen.
#[axum::debug_handler]
pub async fn google_auth_handler(
    State(state): State<Arc<GcalState>>,
) -> Result<Redirect, (StatusCode, String)> {
    let gcal_config = state
        .config
        .gcal
        .as_ref()
        .ok_or_else(|| WebicastError::ConfigError("GCal config missing.".to_string()))
        .map_err(IntoHttpResponse::into_http_response)?;

    let url = consent_url(gcal_config)
        .map_err(|e| WebicastError::ConfigError(e.to_string()).into_http_response())?;
    Ok(Redirect::temporary(&url))
}

/// Receives the consent-screen redirect, exchanges the code, and shows
/// the operator the refresh token to copy into the configuration.
#[axum::debug_handler]
pub async fn auth_callback_handler(
    State(state): State<Arc<GcalState>>,
    Query(query): Query<AuthCallbackQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    if let Some(err) = query.error {
        return Err(WebicastError::ValidationError(format!(
            "Google consent screen returned an error: {err}"
        ))
        .into_http_response());
    }
    let code = query
        .code
        .ok_or_else(|| WebicastError::ValidationError("Missing authorization code.".to_string()))
        .map_err(IntoHttpResponse::into_http_response)?;

    let gcal_config = state
        .config
        .gcal
        .as_ref()
        .ok_or_else(|| WebicastError::ConfigError("GCal config missing.".to_string()))
        .map_err(IntoHttpResponse::into_http_response)?;

    let tokens = exchange_code(gcal_config, &code).await.map_err(|e| {
        error!(error = %e, "Error exchanging authorization code for tokens");
        WebicastError::ExternalServiceError {
            service_name: "Google OAuth".to_string(),
            message: "Authentication failed".to_string(),
        }
        .into_http_response()
    })?;

    info!("Google Calendar connected; refresh token issued");
    Ok(Html(render_callback_page(tokens.refresh_token.as_deref())))
}

fn render_callback_page(refresh_token: Option<&str>) -> String {
    let token_block = match refresh_token {
        Some(token) => format!(
            "<p><strong>Next step:</strong> add the refresh token to your environment:</p>\n\
             <pre style=\"background: #f1f3f4; padding: 15px; border-radius: 5px; text-align: left; max-width: 600px; margin: 20px auto;\">WBC_GCAL__REFRESH_TOKEN={token}</pre>"
        ),
        None => "<p>No refresh token was returned. Revoke the app's access in your Google \
                 account and authorize again to receive one.</p>"
            .to_string(),
    };
    format!(
        "<html>\n  <body style=\"font-family: Arial, sans-serif; text-align: center; padding: 50px;\">\n    \
         <h2 style=\"color: #4285f4;\">✅ Google Calendar Connected!</h2>\n    \
         <p>You can now create real Google Meet events with calendar invitations.</p>\n    \
         {token_block}\n    \
         <p><button onclick=\"window.close()\">Close this window</button></p>\n  </body>\n</html>"
    )
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub is_configured: bool,
    pub has_refresh_token: bool,
    pub can_create_meetings: bool,
}

/// Reports whether real meeting creation is possible.
#[axum::debug_handler]
pub async fn auth_status_handler(State(state): State<Arc<GcalState>>) -> Json<AuthStatusResponse> {
    let (is_configured, has_refresh_token) = state
        .config
        .gcal
        .as_ref()
        .map(|g| (g.is_configured(), g.has_refresh_token()))
        .unwrap_or((false, false));

    Json(AuthStatusResponse {
        is_configured,
        has_refresh_token,
        can_create_meetings: is_configured && has_refresh_token,
    })
}
