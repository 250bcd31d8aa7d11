//! Member entity - one backend server

use serde::{Deserialize, Serialize};

use super::{default_status, default_true};

fn default_weight() -> u32 {
    1
}

/// A backend server entry in a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub address: String,
    pub protocol_port: u16,
    /// 0 keeps the server configured but routes no new traffic to it
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub subnet_id: Option<String>,
    #[serde(default = "default_true")]
    pub admin_state_up: bool,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub pool_id: Option<String>,
}

impl Member {
    pub fn new(id: impl Into<String>, address: impl Into<String>, protocol_port: u16) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            protocol_port,
            weight: default_weight(),
            subnet_id: None,
            admin_state_up: true,
            status: default_status(),
            pool_id: None,
        }
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_subnet_id(mut self, subnet_id: impl Into<String>) -> Self {
        self.subnet_id = Some(subnet_id.into());
        self
    }

    pub fn with_admin_state_up(mut self, up: bool) -> Self {
        self.admin_state_up = up;
        self
    }
}
