// --- File: crates/webicast_gcal/src/oauth_test.rs ---
use crate::oauth::{consent_url, OAuthError};
use webicast_config::GcalConfig;

fn configured() -> GcalConfig {
    GcalConfig {
        client_id: Some("id.apps.googleusercontent.com".into()),
        client_secret: Some("secret".into()),
        ..GcalConfig::default()
    }
}

#[test]
fn consent_url_carries_offline_access_and_scopes() {
    let url = consent_url(&configured()).unwrap();

    assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
    assert!(url.contains("client_id=id.apps.googleusercontent.com"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("access_type=offline"));
    assert!(url.contains("prompt=consent"));
    // Both calendar scopes, space-encoded
    assert!(url.contains("calendar.events"));
}

#[test]
fn consent_url_encodes_the_redirect_uri() {
    let url = consent_url(&configured()).unwrap();
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3001%2Fauth%2Fcallback"));
}

#[test]
fn missing_client_id_is_not_configured() {
    let err = consent_url(&GcalConfig::default()).unwrap_err();
    assert!(matches!(err, OAuthError::NotConfigured));
}
