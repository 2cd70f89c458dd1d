use std::{env, time::Duration};

use dpg_common::Secret;
use log::*;

use crate::ZenitsuApiError;

pub const DEFAULT_BASE_URL: &str = "https://api.zenitsu.web.id";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the Zenitsu QRIS gateway.
///
/// Credentials are optional on purpose: a server booted without them must come up normally and
/// fail each gateway call with a configuration error instead of crashing at startup.
#[derive(Debug, Clone)]
pub struct ZenitsuConfig {
    /// Base URL of the gateway, e.g. `https://api.zenitsu.web.id`.
    pub base_url: String,
    /// Account name on the gateway.
    pub username: Option<Secret<String>>,
    /// API token paired with the account name.
    pub token: Option<Secret<String>>,
    /// Upper bound on every outbound call, connection and body included.
    pub timeout: Duration,
}

impl Default for ZenitsuConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), username: None, token: None, timeout: DEFAULT_TIMEOUT }
    }
}

impl ZenitsuConfig {
    pub fn from_env_or_default() -> Self {
        let base_url = env::var("DPG_ZENITSU_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let username = load_credential("DPG_ZENITSU_USERNAME");
        let token = load_credential("DPG_ZENITSU_TOKEN");
        let timeout = env::var("DPG_ZENITSU_TIMEOUT")
            .map_err(|_| {
                info!(
                    "🪛️ DPG_ZENITSU_TIMEOUT is not set. Using the default value of {} seconds.",
                    DEFAULT_TIMEOUT.as_secs()
                )
            })
            .and_then(|s| {
                s.parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|e| warn!("🪛️ Invalid configuration value for DPG_ZENITSU_TIMEOUT. {e}"))
            })
            .ok()
            .unwrap_or(DEFAULT_TIMEOUT);
        Self { base_url, username, token, timeout }
    }

    /// Returns both credentials, or the configuration error that every gateway call must surface
    /// when one of them is missing. No network I/O happens past a failure here.
    pub fn credentials(&self) -> Result<(&str, &str), ZenitsuApiError> {
        let username = self.username.as_ref().ok_or_else(|| {
            ZenitsuApiError::MissingCredentials("DPG_ZENITSU_USERNAME is not set".to_string())
        })?;
        let token = self
            .token
            .as_ref()
            .ok_or_else(|| ZenitsuApiError::MissingCredentials("DPG_ZENITSU_TOKEN is not set".to_string()))?;
        Ok((username.reveal().as_str(), token.reveal().as_str()))
    }
}

// An empty value counts as unset, so a blank line in a .env file is not mistaken for a credential.
fn load_credential(var: &str) -> Option<Secret<String>> {
    match env::var(var) {
        Ok(s) if !s.trim().is_empty() => Some(Secret::new(s)),
        _ => {
            warn!("🪛️ {var} is not set. QR issuance and payment checks will fail until it is configured.");
            None
        },
    }
}
