//! Listener entity - a frontend bound on the load balancer's VIP

use serde::{Deserialize, Serialize};

use super::{default_true, LoadBalancerRef, Pool};

/// A listener (port + protocol) with an optional default pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listener {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub protocol_port: u16,
    /// HTTP, HTTPS or TCP (any case)
    pub protocol: String,
    #[serde(default)]
    pub default_pool: Option<Pool>,
    /// -1 (or any negative value) and `None` mean unlimited
    #[serde(default)]
    pub connection_limit: Option<i64>,
    #[serde(default = "default_true")]
    pub admin_state_up: bool,
    /// Parent load balancer, used when a listener is handled on its own
    #[serde(default)]
    pub load_balancer: Option<LoadBalancerRef>,
}

impl Listener {
    pub fn new(id: impl Into<String>, protocol: impl Into<String>, protocol_port: u16) -> Self {
        Self {
            id: id.into(),
            name: None,
            protocol_port,
            protocol: protocol.into(),
            default_pool: None,
            connection_limit: None,
            admin_state_up: true,
            load_balancer: None,
        }
    }

    pub fn with_default_pool(mut self, pool: Pool) -> Self {
        self.default_pool = Some(pool);
        self
    }

    pub fn with_connection_limit(mut self, limit: i64) -> Self {
        self.connection_limit = Some(limit);
        self
    }

    pub fn with_load_balancer(mut self, parent: LoadBalancerRef) -> Self {
        self.load_balancer = Some(parent);
        self
    }
}
