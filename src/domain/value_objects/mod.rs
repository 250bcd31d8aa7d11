//! Domain Value Objects
//!
//! Immutable value types: the closed enum tables that validate raw topology
//! strings, the expected-codes set, content hashes and the rendering context.

mod expected_codes;
mod hash;
mod lb_algorithm;
mod monitor_type;
mod persistence_type;
mod protocol;
mod render_context;

pub use expected_codes::ExpectedCodes;
pub use hash::ContentHash;
pub use lb_algorithm::LbAlgorithm;
pub use monitor_type::MonitorType;
pub use persistence_type::PersistenceType;
pub use protocol::Protocol;
pub(crate) use render_context::bool_str;
pub use render_context::{
    HealthMonitorContext, ListenerContext, LoadBalancerContext, MemberContext, PoolContext,
    SessionPersistenceContext,
};
