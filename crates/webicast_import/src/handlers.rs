// File: crates/webicast_import/src/handlers.rs
use crate::logic::{parse_workbook, ImportError};
use crate::template::template_workbook_bytes;
use axum::{
    extract::Multipart,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{error, info};
use webicast_common::{IntoHttpResponse, Webinar, WebicastError};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub success: bool,
    pub count: usize,
    pub webinars: Vec<Webinar>,
}

/// Handler to parse an uploaded spreadsheet into webinar records.
///
/// Accepts a multipart upload and reads the first file part.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/import", // Path relative to /api
    responses(
        (status = 200, description = "Parsed webinar records"),
        (status = 400, description = "No file uploaded or workbook unreadable")
    ),
    tag = "Import"
))]
pub async fn import_webinars_handler(
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, (StatusCode, String)> {
    let mut file_bytes = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        WebicastError::ValidationError(format!("Failed to read multipart body: {e}"))
            .into_http_response()
    })? {
        let is_file = field.name() == Some("file") || field.file_name().is_some();
        if is_file {
            let bytes = field.bytes().await.map_err(|e| {
                WebicastError::ValidationError(format!("Failed to read uploaded file: {e}"))
                    .into_http_response()
            })?;
            file_bytes = Some(bytes);
            break;
        }
    }

    let bytes = file_bytes
        .ok_or_else(|| {
            WebicastError::ValidationError(
                "No file found in upload. Send the workbook as a `file` field.".to_string(),
            )
        })
        .map_err(IntoHttpResponse::into_http_response)?;

    let webinars = parse_workbook(&bytes).map_err(|e| {
        error!(error = %e, "Error processing uploaded workbook");
        let message = match e {
            ImportError::Parse(message) => message,
            other => other.to_string(),
        };
        WebicastError::ParseError(message).into_http_response()
    })?;

    info!(count = webinars.len(), "Imported webinar records");
    Ok(Json(ImportResponse {
        success: true,
        count: webinars.len(),
        webinars,
    }))
}

/// Handler to download the sample workbook.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/template", // Path relative to /api
    responses(
        (status = 200, description = "Sample workbook (.xlsx)"),
        (status = 500, description = "Workbook generation failed")
    ),
    tag = "Import"
))]
pub async fn template_handler() -> Result<Response, (StatusCode, String)> {
    let bytes = template_workbook_bytes().map_err(|e| {
        error!(error = %e, "Failed to generate sample workbook");
        WebicastError::InternalError("Failed to generate sample workbook".to_string())
            .into_http_response()
    })?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sample-webinars.xlsx\"",
            ),
        ],
        bytes,
    )
        .into_response())
}
