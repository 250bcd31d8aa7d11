//! LoadBalancer entity - the root of a topology

use serde::{Deserialize, Serialize};

use super::{default_status, default_true, Listener};

/// A load balancer owning a VIP and an ordered list of listeners
///
/// Listener order is significant: frontends and backends are rendered in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// IPv4/IPv6 literal, absent until the VIP port is allocated
    #[serde(default)]
    pub vip_address: Option<String>,
    #[serde(default)]
    pub vip_subnet_id: Option<String>,
    #[serde(default = "default_true")]
    pub admin_state_up: bool,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub listeners: Vec<Listener>,
}

impl LoadBalancer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vip_address: None,
            vip_subnet_id: None,
            admin_state_up: true,
            status: default_status(),
            listeners: Vec::new(),
        }
    }

    pub fn with_vip_address(mut self, address: impl Into<String>) -> Self {
        self.vip_address = Some(address.into());
        self
    }

    pub fn with_vip_subnet_id(mut self, subnet_id: impl Into<String>) -> Self {
        self.vip_subnet_id = Some(subnet_id.into());
        self
    }

    /// Append a listener and point its parent view at this load balancer
    ///
    /// The parent view is a snapshot; set the VIP address before attaching.
    pub fn with_listener(mut self, mut listener: Listener) -> Self {
        listener.load_balancer = Some(self.as_ref_view());
        self.listeners.push(listener);
        self
    }

    /// Parent view handed to listeners
    pub fn as_ref_view(&self) -> LoadBalancerRef {
        LoadBalancerRef {
            id: self.id.clone(),
            name: self.name.clone(),
            vip_address: self.vip_address.clone(),
            vip_subnet_id: self.vip_subnet_id.clone(),
        }
    }
}

/// Lightweight view of a listener's parent load balancer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vip_address: Option<String>,
    #[serde(default)]
    pub vip_subnet_id: Option<String>,
}
