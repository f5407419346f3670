// File: crates/webicast_mailer/src/handlers.rs
use crate::dispatch::{send_notifications, NotificationResult, NotifyError};
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use webicast_common::{IntoHttpResponse, Webinar, WebicastError};
use webicast_config::AppConfig;

// Define shared state needed by mailer handlers
#[derive(Clone)]
pub struct MailerState {
    pub config: Arc<AppConfig>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NotifyRequest {
    pub webinar: Webinar,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NotifyResponse {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub result: NotificationResult,
}

/// Handler to send the two invitation emails for a provisioned webinar.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/send-notifications", // Path relative to /api
    request_body = NotifyRequest,
    responses(
        (status = 200, description = "Both emails sent"),
        (status = 400, description = "Webinar not provisioned yet"),
        (status = 500, description = "Configuration missing or delivery failed"),
        (status = 503, description = "SMTP service disabled")
    ),
    tag = "Mailer"
))]
pub async fn send_notifications_handler(
    State(state): State<Arc<MailerState>>,
    Json(payload): Json<NotifyRequest>,
) -> Result<Json<NotifyResponse>, (StatusCode, String)> {
    // Ensure SMTP feature is enabled via runtime config
    if !state.config.use_smtp {
        return Err(WebicastError::ServiceDisabled("SMTP").into_http_response());
    }

    let smtp = state
        .config
        .smtp
        .as_ref()
        .ok_or_else(|| {
            WebicastError::ConfigError(
                "Email configuration missing. Set WBC_SMTP__USER and WBC_SMTP__PASS.".to_string(),
            )
        })
        .map_err(IntoHttpResponse::into_http_response)?;

    let webinar = payload.webinar;
    let result = send_notifications(smtp, &webinar).await.map_err(|e| {
        error!(webinar_id = %webinar.webinar_id, error = %e, "Email sending error");
        let mapped = match &e {
            NotifyError::Config(_) => WebicastError::ConfigError(e.to_string()),
            NotifyError::MissingLink | NotifyError::Address(_) => {
                WebicastError::ValidationError(e.to_string())
            }
            NotifyError::TimeParse(_) => WebicastError::ParseError(e.to_string()),
            NotifyError::Verify(_) | NotifyError::Transport(_) => {
                WebicastError::ExternalServiceError {
                    service_name: "SMTP".to_string(),
                    message: e.to_string(),
                }
            }
            NotifyError::Message(_) => WebicastError::InternalError(e.to_string()),
        };
        mapped.into_http_response()
    })?;

    Ok(Json(NotifyResponse {
        success: true,
        message: "Email notifications sent successfully".to_string(),
        result,
    }))
}
