// --- File: crates/webicast_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

// --- SMTP Config ---
// user/pass stay optional so the server can boot unconfigured; notify then
// rejects with a configuration error instead of silently dropping mail.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub user: Option<String>, // WBC_SMTP__USER
    #[serde(default)]
    pub pass: Option<String>, // WBC_SMTP__PASS
    #[serde(default)]
    pub from_name: Option<String>,
    #[serde(default)]
    pub from_address: Option<String>,
    /// Connect/send timeout for the SMTP transport, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        SmtpConfig {
            host: default_smtp_host(),
            port: default_smtp_port(),
            user: None,
            pass: None,
            from_name: None,
            from_address: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SmtpConfig {
    /// Username/password pair, present only when both are non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let user = self.user.as_deref().filter(|s| !s.is_empty())?;
        let pass = self.pass.as_deref().filter(|s| !s.is_empty())?;
        Some((user, pass))
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    /// Display name used in the From header.
    pub fn sender_name(&self) -> &str {
        self.from_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("Webinar Management")
    }

    /// From address, falling back to the SMTP username.
    pub fn sender_address(&self) -> Option<&str> {
        self.from_address
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.user.as_deref().filter(|s| !s.is_empty()))
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

// --- Google Calendar Config ---
// Secrets arrive via env vars: WBC_GCAL__CLIENT_ID, WBC_GCAL__CLIENT_SECRET,
// WBC_GCAL__REFRESH_TOKEN. Without a refresh token the provisioner runs in
// demo mode and fabricates meeting links.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GcalConfig {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,
    /// Timeout for the Calendar insert call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GcalConfig {
    fn default() -> Self {
        GcalConfig {
            client_id: None,
            client_secret: None,
            refresh_token: None,
            redirect_uri: default_redirect_uri(),
            calendar_id: default_calendar_id(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl GcalConfig {
    /// OAuth client credentials are present (consent flow can run).
    pub fn is_configured(&self) -> bool {
        self.client_id.as_deref().is_some_and(|s| !s.is_empty())
            && self.client_secret.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// A refresh credential is present (real events can be created).
    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token.as_deref().is_some_and(|s| !s.is_empty())
    }
}

fn default_redirect_uri() -> String {
    "http://localhost:3001/auth/callback".to_string()
}

fn default_calendar_id() -> String {
    "primary".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // Runtime flags; both features are on by default because the provisioner
    // degrades to demo links on its own when credentials are missing.
    #[serde(default = "default_true")]
    pub use_gcal: bool,
    #[serde(default = "default_true")]
    pub use_smtp: bool,

    #[serde(default)]
    pub gcal: Option<GcalConfig>,
    #[serde(default)]
    pub smtp: Option<SmtpConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server: ServerConfig::default(),
            use_gcal: true,
            use_smtp: true,
            gcal: None,
            smtp: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_deserializes_with_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert!(config.use_gcal);
        assert!(config.use_smtp);
        assert!(config.gcal.is_none());
        assert!(config.smtp.is_none());
    }

    #[test]
    fn smtp_credentials_require_both_halves() {
        let mut smtp = SmtpConfig {
            user: Some("mailer@example.com".to_string()),
            ..SmtpConfig::default()
        };
        assert!(!smtp.is_configured());

        smtp.pass = Some("app-password".to_string());
        assert!(smtp.is_configured());
        assert_eq!(
            smtp.credentials(),
            Some(("mailer@example.com", "app-password"))
        );

        smtp.pass = Some(String::new());
        assert!(!smtp.is_configured());
    }

    #[test]
    fn smtp_sender_falls_back_to_user() {
        let smtp = SmtpConfig {
            user: Some("mailer@example.com".to_string()),
            ..SmtpConfig::default()
        };
        assert_eq!(smtp.sender_name(), "Webinar Management");
        assert_eq!(smtp.sender_address(), Some("mailer@example.com"));
    }

    #[test]
    fn gcal_flags_track_credential_presence() {
        let gcal: GcalConfig = serde_json::from_str(
            r#"{"client_id": "id.apps.googleusercontent.com", "client_secret": "secret"}"#,
        )
        .unwrap();
        assert!(gcal.is_configured());
        assert!(!gcal.has_refresh_token());
        assert_eq!(gcal.calendar_id, "primary");
        assert_eq!(gcal.request_timeout_secs, 30);
    }
}
