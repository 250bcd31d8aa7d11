//! VIP synthesis for legacy drivers
//!
//! A legacy VIP is a load balancer address fused with one listener. A load
//! balancer maps onto its first listener; a listener maps onto its parent's
//! address.

use crate::domain::entities::{Listener, LoadBalancer, SessionPersistence};
use crate::domain::ports::Vip;

/// `connection_limit` value a legacy driver reads as unlimited
pub const UNLIMITED_CONNECTIONS: i64 = -1;

impl Vip {
    /// VIP for a whole load balancer
    ///
    /// Port, protocol, limit, pool and persistence come from the first
    /// listener and are absent when the load balancer has none.
    pub fn from_load_balancer(load_balancer: &LoadBalancer) -> Self {
        let first = load_balancer.listeners.first();
        let (pool_id, session_persistence) = first.map(listener_fields).unwrap_or_default();

        Self {
            id: load_balancer.id.clone(),
            name: load_balancer.name.clone(),
            address: load_balancer.vip_address.clone(),
            subnet_id: load_balancer.vip_subnet_id.clone(),
            protocol: first.map(|l| l.protocol.clone()),
            protocol_port: first.map(|l| l.protocol_port),
            connection_limit: first.map_or(UNLIMITED_CONNECTIONS, connection_limit),
            pool_id,
            session_persistence,
            admin_state_up: load_balancer.admin_state_up,
        }
    }

    /// VIP for a single listener, addressed through its parent view
    pub fn from_listener(listener: &Listener) -> Self {
        let parent = listener.load_balancer.as_ref();
        let (pool_id, session_persistence) = listener_fields(listener);

        Self {
            id: listener.id.clone(),
            name: listener.name.clone().unwrap_or_else(|| listener.id.clone()),
            address: parent.and_then(|lb| lb.vip_address.clone()),
            subnet_id: parent.and_then(|lb| lb.vip_subnet_id.clone()),
            protocol: Some(listener.protocol.clone()),
            protocol_port: Some(listener.protocol_port),
            connection_limit: connection_limit(listener),
            pool_id,
            session_persistence,
            admin_state_up: listener.admin_state_up,
        }
    }
}

fn connection_limit(listener: &Listener) -> i64 {
    match listener.connection_limit {
        Some(limit) if limit >= 0 => limit,
        _ => UNLIMITED_CONNECTIONS,
    }
}

fn listener_fields(listener: &Listener) -> (Option<String>, Option<SessionPersistence>) {
    match &listener.default_pool {
        Some(pool) => (Some(pool.id.clone()), pool.session_persistence.clone()),
        None => (None, None),
    }
}
