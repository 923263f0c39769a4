use serde::Deserialize;
use userhub_core::error::{Result, UserHubError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub limiter: LimiterSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            limiter: LimiterSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(UserHubError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.limiter.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,

    /// Upper bound on handling one API request; exceeded requests get 408.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
            shutdown_grace_ms: default_shutdown_grace_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(UserHubError::BadRequest(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            )));
        }
        if !(1024..=16 * 1024 * 1024).contains(&self.max_body_bytes) {
            return Err(UserHubError::BadRequest(
                "server.max_body_bytes must be between 1024 and 16777216".into(),
            ));
        }
        if !(100..=60000).contains(&self.shutdown_grace_ms) {
            return Err(UserHubError::BadRequest(
                "server.shutdown_grace_ms must be between 100 and 60000".into(),
            ));
        }
        if !(100..=60000).contains(&self.request_timeout_ms) {
            return Err(UserHubError::BadRequest(
                "server.request_timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_max_body_bytes() -> usize {
    1 << 20
}
fn default_shutdown_grace_ms() -> u64 {
    5000
}
fn default_request_timeout_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimiterSection {
    #[serde(default = "default_capacity")]
    pub capacity: u32,

    /// Tokens added per second; 0 disables refill.
    #[serde(default = "default_refill_per_sec")]
    pub refill_per_sec: f64,
}

impl Default for LimiterSection {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            refill_per_sec: default_refill_per_sec(),
        }
    }
}

impl LimiterSection {
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(UserHubError::BadRequest(
                "limiter.capacity must be at least 1".into(),
            ));
        }
        if !self.refill_per_sec.is_finite() || self.refill_per_sec < 0.0 {
            return Err(UserHubError::BadRequest(
                "limiter.refill_per_sec must be a finite number >= 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_capacity() -> u32 {
    10000
}
fn default_refill_per_sec() -> f64 {
    5000.0
}
