// --- File: crates/webicast_common/src/lib.rs ---

// Declare modules within this crate
pub mod calendar_link; // Google Calendar deep-link builder
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared webinar domain model

// Re-export the domain model for easier access
pub use models::{Contact, Webinar, WebinarStatus, WEBINAR_DURATION_MINUTES};

// Re-export error types and utilities for easier access
pub use error::{HttpStatusCode, WebicastError};

// Re-export HTTP utilities for easier access
pub use http::{client::HTTP_CLIENT, IntoHttpResponse};

pub use calendar_link::build_calendar_link;
