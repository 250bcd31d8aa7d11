//! Pool entity - a group of backend servers

use serde::{Deserialize, Serialize};

use super::{default_status, default_true, HealthMonitor, Member, SessionPersistence};

/// A pool of members behind a listener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub protocol: String,
    /// ROUND_ROBIN, LEAST_CONNECTIONS or SOURCE_IP
    pub lb_algorithm: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub health_monitor: Option<HealthMonitor>,
    #[serde(default)]
    pub session_persistence: Option<SessionPersistence>,
    #[serde(default = "default_true")]
    pub admin_state_up: bool,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Pool {
    pub fn new(
        id: impl Into<String>,
        protocol: impl Into<String>,
        lb_algorithm: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            protocol: protocol.into(),
            lb_algorithm: lb_algorithm.into(),
            members: Vec::new(),
            health_monitor: None,
            session_persistence: None,
            admin_state_up: true,
            status: default_status(),
        }
    }

    /// Append a member, recording this pool as its owner
    pub fn with_member(mut self, mut member: Member) -> Self {
        member.pool_id = Some(self.id.clone());
        self.members.push(member);
        self
    }

    pub fn with_health_monitor(mut self, monitor: HealthMonitor) -> Self {
        self.health_monitor = Some(monitor);
        self
    }

    pub fn with_session_persistence(mut self, persistence: SessionPersistence) -> Self {
        self.session_persistence = Some(persistence);
        self
    }
}
