//! HealthMonitor entity - periodic check of a pool's members

use serde::{Deserialize, Serialize};

use super::default_true;

fn default_http_method() -> String {
    "GET".to_string()
}

fn default_url_path() -> String {
    "/".to_string()
}

fn default_expected_codes() -> String {
    "200".to_string()
}

/// A health monitor attached to exactly one pool
///
/// `pool_id` names the owning pool. The legacy driver addresses monitors
/// through their pool, so the back-reference is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMonitor {
    pub id: String,
    pub pool_id: String,
    /// HTTP, HTTPS, TCP or PING
    #[serde(rename = "type")]
    pub monitor_type: String,
    /// Seconds between checks
    pub delay: u32,
    /// Check timeout, not validated against `delay`
    pub timeout: u32,
    pub max_retries: u32,
    #[serde(default = "default_http_method")]
    pub http_method: String,
    #[serde(default = "default_url_path")]
    pub url_path: String,
    /// Codes and ranges, e.g. "500, 405, 404" or "200-204"
    #[serde(default = "default_expected_codes")]
    pub expected_codes: String,
    #[serde(default = "default_true")]
    pub admin_state_up: bool,
}

impl HealthMonitor {
    pub fn new(
        id: impl Into<String>,
        pool_id: impl Into<String>,
        monitor_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            pool_id: pool_id.into(),
            monitor_type: monitor_type.into(),
            delay: 5,
            timeout: 5,
            max_retries: 3,
            http_method: default_http_method(),
            url_path: default_url_path(),
            expected_codes: default_expected_codes(),
            admin_state_up: true,
        }
    }

    pub fn with_timing(mut self, delay: u32, timeout: u32, max_retries: u32) -> Self {
        self.delay = delay;
        self.timeout = timeout;
        self.max_retries = max_retries;
        self
    }

    pub fn with_http_check(
        mut self,
        http_method: impl Into<String>,
        url_path: impl Into<String>,
        expected_codes: impl Into<String>,
    ) -> Self {
        self.http_method = http_method.into();
        self.url_path = url_path.into();
        self.expected_codes = expected_codes.into();
        self
    }
}
