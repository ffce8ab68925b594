//! Configuration schema for the HTTP helpers.
//!
//! These settings shape the client that the free functions
//! [`get`](crate::executor::get) and [`post`](crate::executor::post) build for each call.

use reqwest::header::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bound accepted for `maxRedirects`.
pub const MAX_REDIRECT_LIMIT: u32 = 50;

/// Client-wide settings.
///
/// Missing settings fall back to defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkConfig {
    /// Request timeout in milliseconds. Must be greater than 0.
    ///
    /// A `timeout_ms` on an individual [`RequestConfig`](crate::models::RequestConfig)
    /// overrides it.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Whether to follow 3xx redirects, up to `max_redirects` times.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,

    /// Maximum number of redirects to follow. At most 50.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,

    /// Whether to validate TLS certificates.
    ///
    /// **Warning:** Disabling validation exposes requests to interception.
    #[serde(default = "default_validate_ssl")]
    pub validate_ssl: bool,

    /// User-Agent sent with every request. Must not be empty.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Headers added to every request. Per-request headers with the same name win.
    #[serde(default)]
    pub default_headers: HashMap<String, String>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            follow_redirects: default_follow_redirects(),
            max_redirects: default_max_redirects(),
            validate_ssl: default_validate_ssl(),
            user_agent: default_user_agent(),
            default_headers: HashMap::new(),
        }
    }
}

impl SdkConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive error message.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("timeout must be greater than 0".to_string());
        }

        if self.max_redirects > MAX_REDIRECT_LIMIT {
            return Err(format!(
                "maxRedirects must be at most {}",
                MAX_REDIRECT_LIMIT
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err("userAgent must not be empty".to_string());
        }

        for (name, value) in &self.default_headers {
            if HeaderName::from_bytes(name.as_bytes()).is_err() {
                return Err(format!("invalid header name in defaultHeaders: {:?}", name));
            }
            if HeaderValue::from_str(value).is_err() {
                return Err(format!("invalid value for header {:?}", name));
            }
        }

        Ok(())
    }

    /// Returns the timeout as a `std::time::Duration`.
    pub fn timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout)
    }

    /// Overlays `other` on this configuration.
    ///
    /// Scalar settings are taken from `other`; default headers are combined,
    /// with `other` winning on conflicts.
    pub fn merge(&self, other: &SdkConfig) -> Self {
        let mut default_headers = self.default_headers.clone();
        default_headers.extend(other.default_headers.clone());

        Self {
            timeout: other.timeout,
            follow_redirects: other.follow_redirects,
            max_redirects: other.max_redirects,
            validate_ssl: other.validate_ssl,
            user_agent: other.user_agent.clone(),
            default_headers,
        }
    }
}

// Default value functions for serde

fn default_timeout() -> u64 {
    30000 // 30 seconds in milliseconds
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirects() -> u32 {
    10
}

fn default_validate_ssl() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("sdk-utils/{}", env!("CARGO_PKG_VERSION"))
}
