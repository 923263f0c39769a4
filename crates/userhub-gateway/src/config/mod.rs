//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use userhub_core::error::{Result, UserHubError};

pub use schema::{GatewayConfig, LimiterSection, ServerSection};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "USERHUB_CONFIG";
/// Used when `USERHUB_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "userhub.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| UserHubError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| UserHubError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config from `USERHUB_CONFIG`, or from `userhub.yaml` when unset.
///
/// A missing default file yields the built-in defaults; a missing file that
/// was named explicitly is an error.
pub fn load_from_env() -> Result<GatewayConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path),
        Err(_) => match fs::read_to_string(DEFAULT_CONFIG_PATH) {
            Ok(s) => load_from_str(&s),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
                Ok(GatewayConfig::default())
            }
            Err(e) => Err(UserHubError::Internal(format!("read config failed: {e}"))),
        },
    }
}
