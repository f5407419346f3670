// --- File: crates/webicast_common/src/http.rs ---
use axum::http::StatusCode;

use crate::error::{HttpStatusCode, WebicastError};

// Include the client module
pub mod client;

/// Extension trait for WebicastError to convert it into the rejection
/// shape the Axum handlers return.
pub trait IntoHttpResponse {
    /// Converts the error into a status code plus message body.
    fn into_http_response(self) -> (StatusCode, String);
}

impl IntoHttpResponse for WebicastError {
    fn into_http_response(self) -> (StatusCode, String) {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.to_string())
    }
}
