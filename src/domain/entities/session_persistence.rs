//! SessionPersistence entity - stickiness policy of a pool

use serde::{Deserialize, Serialize};

/// Routes a client's repeated requests to the same member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPersistence {
    /// SOURCE_IP, HTTP_COOKIE or APP_COOKIE
    #[serde(rename = "type")]
    pub persistence_type: String,
    /// Required for APP_COOKIE
    #[serde(default)]
    pub cookie_name: Option<String>,
}

impl SessionPersistence {
    pub fn new(persistence_type: impl Into<String>) -> Self {
        Self {
            persistence_type: persistence_type.into(),
            cookie_name: None,
        }
    }

    pub fn with_cookie_name(mut self, cookie_name: impl Into<String>) -> Self {
        self.cookie_name = Some(cookie_name.into());
        self
    }
}
