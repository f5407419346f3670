// File: crates/webicast_gcal/src/auth.rs
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{authorized_user::AuthorizedUserSecret, AuthorizedUserAuthenticator},
    CalendarHub,
};
use std::error::Error;
use webicast_config::GcalConfig;

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// Builds an authenticated Calendar hub from the OAuth client credentials
/// plus the stored refresh token. The authenticator refreshes access tokens
/// on demand for the life of the hub.
pub async fn create_calendar_hub(
    config: &GcalConfig,
) -> Result<HubType, Box<dyn Error + Send + Sync>> {
    let client_id = config
        .client_id
        .as_deref()
        .ok_or("Missing client_id in GcalConfig")?;
    let client_secret = config
        .client_secret
        .as_deref()
        .ok_or("Missing client_secret in GcalConfig")?;
    let refresh_token = config
        .refresh_token
        .as_deref()
        .ok_or("Missing refresh_token in GcalConfig")?;

    let secret: AuthorizedUserSecret = serde_json::from_value(serde_json::json!({
        "type": "authorized_user",
        "client_id": client_id,
        "client_secret": client_secret,
        "refresh_token": refresh_token,
    }))?;

    let auth = AuthorizedUserAuthenticator::builder(secret).build().await?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .build();

    // Create client without specifying body type
    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    let hub = CalendarHub::new(client, auth);

    Ok(hub)
}
