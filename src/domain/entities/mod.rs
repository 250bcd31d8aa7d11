//! Domain Entities
//!
//! The load-balancer topology handed over by the control plane.
//! - `LoadBalancer` - VIP owner, holds listeners in render order
//! - `Listener` - A frontend (port + protocol) with a default pool
//! - `Pool` - Backend servers plus algorithm, monitor and persistence
//! - `Member` - One backend server
//! - `HealthMonitor` - Periodic member check
//! - `SessionPersistence` - Stickiness policy
//!
//! Entities are read-only inside lbforge; enum-valued fields keep the raw
//! strings supplied by the control plane and are validated at transform time.

mod health_monitor;
mod listener;
mod load_balancer;
mod member;
mod pool;
mod session_persistence;

pub use health_monitor::HealthMonitor;
pub use listener::Listener;
pub use load_balancer::{LoadBalancer, LoadBalancerRef};
pub use member::Member;
pub use pool::Pool;
pub use session_persistence::SessionPersistence;

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_status() -> String {
    "ACTIVE".to_string()
}
