//! Rendering context - primitive-only view of a topology
//!
//! Produced by `domain::services::transform`, consumed by the config
//! renderer. Every field is a string, integer, option or list of these:
//! enum names are already mapped and booleans are `"true"`/`"false"`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadBalancerContext {
    pub name: String,
    pub vip_address: Option<String>,
    pub listeners: Vec<ListenerContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListenerContext {
    pub id: String,
    pub protocol_port: u16,
    /// Lower-cased protocol name
    pub protocol: String,
    /// HAProxy proxy mode (`http` or `tcp`)
    pub mode: String,
    pub default_pool: PoolContext,
    /// `None` means unlimited
    pub connection_limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolContext {
    pub id: String,
    pub protocol: String,
    pub mode: String,
    /// HAProxy `balance` keyword
    pub lb_algorithm: String,
    pub members: Vec<MemberContext>,
    pub health_monitor: Option<HealthMonitorContext>,
    pub session_persistence: Option<SessionPersistenceContext>,
    pub admin_state_up: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberContext {
    pub id: String,
    pub address: String,
    pub protocol_port: u16,
    pub weight: u32,
    pub subnet_id: Option<String>,
    pub admin_state_up: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthMonitorContext {
    pub id: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub delay: u32,
    pub timeout: u32,
    pub max_retries: u32,
    pub http_method: String,
    pub url_path: String,
    /// Pipe-joined, ascending (`404|405|500`)
    pub expected_codes: String,
    pub admin_state_up: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionPersistenceContext {
    #[serde(rename = "type")]
    pub persistence_type: String,
    pub cookie_name: Option<String>,
}

/// Booleans cross into the template as lowercase strings
pub(crate) fn bool_str(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}
