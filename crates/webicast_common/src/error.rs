// --- File: crates/webicast_common/src/error.rs ---
use thiserror::Error;

/// The base error type for all Webicast errors.
///
/// Feature crates keep their own error enums close to the code that fails;
/// handlers translate those into one of these variants so every rejection
/// carries a consistent message and HTTP status.
#[derive(Error, Debug)]
pub enum WebicastError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A feature is switched off via the runtime config flags
    #[error("{0} service is disabled.")]
    ServiceDisabled(&'static str),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for WebicastError {
    fn status_code(&self) -> u16 {
        match self {
            WebicastError::ParseError(_) => 400,
            WebicastError::ConfigError(_) => 500,
            WebicastError::ValidationError(_) => 400,
            WebicastError::ServiceDisabled(_) => 503,
            // Provider failures surface as plain 500s, the status the
            // callers of the notify/auth endpoints expect
            WebicastError::ExternalServiceError { .. } => 500,
            WebicastError::InternalError(_) => 500,
        }
    }
}
