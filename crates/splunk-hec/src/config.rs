// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::constants;
use crate::error::HecError;
use std::env;
use std::time::Duration;

/// Connection settings for a single HEC endpoint.
///
/// Immutable once the client is constructed; shared read-only by every
/// delivery attempt and health probe.
#[derive(Debug, Clone)]
pub struct HecConfig {
    /// Collector hostname or address.
    pub host: String,
    /// Collector port.
    pub port: u16,
    /// HEC authentication token.
    pub token: String,
    /// Whether to connect over HTTPS.
    pub use_tls: bool,
    /// Whether to verify the server certificate.
    pub verify_tls: bool,
    /// Endpoint path, appended after `/services/`.
    pub endpoint_path: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum batch payload size in bytes.
    pub max_payload_bytes: usize,
}

impl Default for HecConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: constants::DEFAULT_PORT,
            token: String::new(),
            use_tls: true,
            verify_tls: true,
            endpoint_path: constants::DEFAULT_ENDPOINT_PATH.to_string(),
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
            max_payload_bytes: constants::MAX_PAYLOAD_SIZE_BYTES,
        }
    }
}

impl HecConfig {
    /// Create a configuration for `host` with `token` and defaults elsewhere.
    #[must_use]
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: token.into(),
            ..Self::default()
        }
    }

    /// Create configuration from `SPLUNK_HEC_*` environment variables.
    pub fn from_env() -> Result<Self, HecError> {
        let host = env::var("SPLUNK_HEC_HOST").unwrap_or_default();
        let token = env::var("SPLUNK_HEC_TOKEN").unwrap_or_default();
        let port = env::var("SPLUNK_HEC_PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(constants::DEFAULT_PORT);
        let use_tls = env::var("SPLUNK_HEC_USE_TLS")
            .map(|val| val.to_lowercase() != "false")
            .unwrap_or(true);
        let verify_tls = env::var("SPLUNK_HEC_VERIFY_TLS")
            .map(|val| val.to_lowercase() != "false")
            .unwrap_or(true);
        let endpoint_path = env::var("SPLUNK_HEC_ENDPOINT")
            .unwrap_or_else(|_| constants::DEFAULT_ENDPOINT_PATH.to_string());
        let timeout = env::var("SPLUNK_HEC_TIMEOUT")
            .ok()
            .and_then(|secs| secs.parse::<u64>().ok())
            .map_or(
                Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
                Duration::from_secs,
            );

        let config = Self {
            host,
            port,
            token,
            use_tls,
            verify_tls,
            endpoint_path,
            timeout,
            max_payload_bytes: constants::MAX_PAYLOAD_SIZE_BYTES,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), HecError> {
        if self.host.is_empty() {
            return Err(HecError::InvalidConfig("host must not be empty".to_string()));
        }
        if self.token.is_empty() {
            return Err(HecError::InvalidConfig(
                "token must not be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(HecError::InvalidConfig("port must be non-zero".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(HecError::InvalidConfig(
                "timeout must be non-zero".to_string(),
            ));
        }
        if self.max_payload_bytes == 0 {
            return Err(HecError::InvalidConfig(
                "max_payload_bytes must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Full collector URL, e.g. `https://splunk.example.com:8088/services/collector/event`.
    pub(crate) fn collector_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!(
            "{scheme}://{}:{}/services/{}",
            self.host, self.port, self.endpoint_path
        )
    }

    /// Value for the `Authorization` request header.
    pub(crate) fn auth_header(&self) -> String {
        format!("Splunk {}", self.token)
    }
}
