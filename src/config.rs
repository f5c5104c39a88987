use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;
use tracing::warn;

/// Address the site ships with before the spreadsheet script is deployed.
pub const PLACEHOLDER_ENDPOINT: &str = "YOUR_GOOGLE_APPS_SCRIPT_URL_HERE";

/// Environment variables read by [`RegistrationConfig::from_env`].
pub const ENDPOINT_VAR: &str = "TECH_TRIAD_ENDPOINT";
pub const DELIVERY_VAR: &str = "TECH_TRIAD_DELIVERY";
pub const TIMEOUT_VAR: &str = "TECH_TRIAD_TIMEOUT_SECS";

/// How a transmission is judged to have succeeded.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Require a 2xx status and no `"result": "error"` in the reply.
    #[default]
    Acknowledged,
    /// Fire and forget; only a transport failure counts as an error.
    Opaque,
}

/// Where and how registrations are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    pub endpoint: String,
    pub delivery: DeliveryMode,
    pub timeout: Option<Duration>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            endpoint: PLACEHOLDER_ENDPOINT.to_string(),
            delivery: DeliveryMode::default(),
            timeout: None,
        }
    }
}

impl RegistrationConfig {
    /// Send to `endpoint` with acknowledged delivery and no timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Choose how a transmission is judged to have succeeded.
    pub fn with_delivery(mut self, delivery: DeliveryMode) -> Self {
        self.delivery = delivery;
        self
    }

    /// Abort a request that takes longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read the configuration from the process environment.
    ///
    /// Missing variables keep their defaults. Unparseable delivery modes and
    /// timeouts are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(raw) = lookup(DELIVERY_VAR) {
            match DeliveryMode::from_str(raw.trim()) {
                Ok(mode) => config.delivery = mode,
                Err(_) => warn!(value = %raw, "unknown delivery mode, keeping default"),
            }
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Some(Duration::from_secs(secs)),
                _ => warn!(value = %raw, "invalid timeout, ignoring"),
            }
        }
        config
    }

    /// Whether the endpoint is a real address, not blank or the placeholder.
    pub fn is_configured(&self) -> bool {
        is_configured(&self.endpoint)
    }
}

/// Whether `endpoint` is a real address rather than blank or the placeholder.
pub fn is_configured(endpoint: &str) -> bool {
    let endpoint = endpoint.trim();
    !endpoint.is_empty() && endpoint != PLACEHOLDER_ENDPOINT
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_is_unconfigured() {
        let config = RegistrationConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.delivery, DeliveryMode::Acknowledged);
        assert!(!is_configured("   "));
    }

    #[test]
    fn test_from_lookup() {
        let config = RegistrationConfig::from_lookup(lookup_from(&[
            (ENDPOINT_VAR, " https://script.google.com/macros/s/abc/exec "),
            (DELIVERY_VAR, "Opaque"),
            (TIMEOUT_VAR, "15"),
        ]));
        assert_eq!(config.endpoint, "https://script.google.com/macros/s/abc/exec");
        assert!(config.is_configured());
        assert_eq!(config.delivery, DeliveryMode::Opaque);
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = RegistrationConfig::from_lookup(lookup_from(&[
            (DELIVERY_VAR, "carrier-pigeon"),
            (TIMEOUT_VAR, "soon"),
        ]));
        assert_eq!(config, RegistrationConfig::default());
    }
}
