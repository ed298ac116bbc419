//! # Harness Configuration Module
//!
//! Environment variable-based configuration for the contract harness.
//!
//! ## Environment Variables
//!
//! ### `RESTPROBE_BASE_URL`
//!
//! Base URL of the service under test. Defaults to the public Swagger
//! Petstore demo instance, `https://petstore.swagger.io/v2`.
//!
//! ### `RESTPROBE_CONNECT_TIMEOUT_MS` / `RESTPROBE_TIMEOUT_MS`
//!
//! Connect and whole-request timeouts in milliseconds. Both are unset by
//! default: a hung network call hangs the run, which matches the posture of
//! the suite this harness drives - failures surface as failed cases, not as
//! recovered conditions.
//!
//! ## Usage
//!
//! ```rust
//! use restprobe::config::HarnessConfig;
//!
//! let config = HarnessConfig::from_env();
//! println!("target: {}", config.base_url);
//! ```

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;
use url::Url;

/// Base URL of the public Petstore demo instance.
pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

#[allow(clippy::expect_used)]
static DEFAULT_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"));

/// Harness configuration loaded from environment variables.
///
/// Load this at startup with [`HarnessConfig::from_env()`], or build one
/// around an explicit base URL with [`HarnessConfig::with_base_url()`] when
/// pointing the harness at a stub server.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Base URL the suite addresses; endpoint paths are joined onto it.
    pub base_url: Url,
    /// TCP connect timeout. `None` means wait indefinitely.
    pub connect_timeout: Option<Duration>,
    /// Whole-request timeout. `None` means wait indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE.clone(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl HarnessConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults; a bad base URL
    /// falls back to the Petstore demo instance.
    pub fn from_env() -> Self {
        let base_url = env::var("RESTPROBE_BASE_URL")
            .ok()
            .and_then(|raw| Url::parse(&raw).ok())
            .unwrap_or_else(|| DEFAULT_BASE.clone());
        Self {
            base_url,
            connect_timeout: timeout_from_env("RESTPROBE_CONNECT_TIMEOUT_MS"),
            request_timeout: timeout_from_env("RESTPROBE_TIMEOUT_MS"),
        }
    }

    /// Configuration targeting an explicit base URL, no timeouts.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }
}

fn timeout_from_env(var: &str) -> Option<Duration> {
    env::var(var).ok().and_then(|v| parse_duration_ms(&v))
}

/// Parse a millisecond value, decimal or `0x`-prefixed hex.
fn parse_duration_ms(val: &str) -> Option<Duration> {
    let ms = if let Some(hex) = val.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()?
    } else {
        val.parse().ok()?
    };
    Some(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_petstore_demo() {
        let config = HarnessConfig::default();
        assert_eq!(config.base_url.as_str(), "https://petstore.swagger.io/v2");
        assert!(config.connect_timeout.is_none());
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn parses_decimal_and_hex_milliseconds() {
        assert_eq!(parse_duration_ms("2500"), Some(Duration::from_millis(2500)));
        assert_eq!(parse_duration_ms("0x10"), Some(Duration::from_millis(16)));
        assert_eq!(parse_duration_ms("not-a-number"), None);
        assert_eq!(parse_duration_ms(""), None);
    }

    #[test]
    fn with_base_url_keeps_no_timeouts() {
        let url = Url::parse("http://127.0.0.1:8080").unwrap();
        let config = HarnessConfig::with_base_url(url.clone());
        assert_eq!(config.base_url, url);
        assert!(config.request_timeout.is_none());
    }
}
