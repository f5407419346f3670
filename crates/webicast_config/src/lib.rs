// --- File: crates/webicast_config/src/lib.rs ---

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;

pub mod models;
pub use models::*;

static DOTENV: OnceCell<()> = OnceCell::new();

/// Loads `.env` overrides exactly once per process.
pub fn ensure_dotenv_loaded() {
    DOTENV.get_or_init(|| {
        if dotenv::dotenv().is_ok() {
            tracing::debug!("Loaded environment overrides from .env");
        }
    });
}

/// Loads the application configuration.
///
/// Sources, lowest precedence first: `config/<WBC_RUN_ENV>.*` (optional
/// file, `default` when unset), then environment variables prefixed with
/// `WBC_` using `__` as the section separator (e.g. `WBC_SMTP__USER`,
/// `WBC_GCAL__REFRESH_TOKEN`). Called once in `main`; the result is shared
/// as `Arc<AppConfig>` so no component reads the environment afterwards.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let run_env = std::env::var("WBC_RUN_ENV").unwrap_or_else(|_| "default".to_string());
    Config::builder()
        .add_source(File::with_name(&format!("config/{run_env}")).required(false))
        .add_source(Environment::with_prefix("WBC").separator("__"))
        .build()?
        .try_deserialize()
}
