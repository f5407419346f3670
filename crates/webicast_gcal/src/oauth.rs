// --- File: crates/webicast_gcal/src/oauth.rs ---
//! Google OAuth consent + code-exchange flow used to mint the refresh
//! token that the provisioner runs on.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use webicast_common::HTTP_CLIENT;
use webicast_config::GcalConfig;

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Scopes needed to create calendar events with Meet conferences.
const SCOPES: &str =
    "https://www.googleapis.com/auth/calendar https://www.googleapis.com/auth/calendar.events";

#[derive(Error, Debug)]
pub enum OAuthError {
    #[error("Google OAuth client credentials are not configured")]
    NotConfigured,
    #[error("Token exchange failed: {0}")]
    Exchange(String),
    #[error("HTTP error during token exchange: {0}")]
    Http(#[from] reqwest::Error),
}

/// Token endpoint response.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    /// Present on first consent (access_type=offline + prompt=consent).
    pub refresh_token: Option<String>,
    pub expires_in: u64,
    pub token_type: String,
    pub scope: Option<String>,
}

#[derive(Serialize)]
struct ConsentQuery<'a> {
    client_id: &'a str,
    redirect_uri: &'a str,
    response_type: &'static str,
    scope: &'static str,
    access_type: &'static str,
    prompt: &'static str,
}

#[derive(Serialize)]
struct ExchangeForm<'a> {
    code: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
    grant_type: &'static str,
}

/// Builds the consent-screen URL the browser is redirected to.
///
/// `access_type=offline` and `prompt=consent` force Google to issue a
/// refresh token even when the user granted access before.
pub fn consent_url(config: &GcalConfig) -> Result<String, OAuthError> {
    let client_id = config
        .client_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(OAuthError::NotConfigured)?;

    let query = ConsentQuery {
        client_id,
        redirect_uri: &config.redirect_uri,
        response_type: "code",
        scope: SCOPES,
        access_type: "offline",
        prompt: "consent",
    };
    let encoded = serde_urlencoded::to_string(&query)
        .map_err(|e| OAuthError::Exchange(format!("Failed to encode consent query: {e}")))?;
    Ok(format!("{AUTH_URL}?{encoded}"))
}

/// Exchanges the authorization code returned by the consent screen for
/// access + refresh tokens.
pub async fn exchange_code(
    config: &GcalConfig,
    code: &str,
) -> Result<GoogleTokenResponse, OAuthError> {
    let (client_id, client_secret) = match (
        config.client_id.as_deref().filter(|s| !s.is_empty()),
        config.client_secret.as_deref().filter(|s| !s.is_empty()),
    ) {
        (Some(id), Some(secret)) => (id, secret),
        _ => return Err(OAuthError::NotConfigured),
    };

    let form = ExchangeForm {
        code,
        client_id,
        client_secret,
        redirect_uri: &config.redirect_uri,
        grant_type: "authorization_code",
    };

    debug!("Exchanging authorization code at {}", TOKEN_URL);
    let response = HTTP_CLIENT.post(TOKEN_URL).form(&form).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(OAuthError::Exchange(format!(
            "token endpoint returned {status}: {body}"
        )));
    }

    Ok(response.json::<GoogleTokenResponse>().await?)
}
