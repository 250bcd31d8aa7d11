//! Domain Services
//!
//! Stateless domain logic. `transform` turns a topology into the
//! primitive-only rendering context.

pub mod transform;

pub use transform::{
    transform_health_monitor, transform_listener, transform_loadbalancer, transform_member,
    transform_pool, transform_session_persistence, DEFAULT_HTTP_COOKIE_NAME,
};
