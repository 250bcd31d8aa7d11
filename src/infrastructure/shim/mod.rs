//! Version adapter from the entity-grouped driver interface to a legacy
//! VIP-centric driver

mod driver;
mod vip;

pub use driver::{
    HealthMonitorManager, ListenerManager, LoadBalancerManager, MemberManager, PoolManager,
    ShimDriver,
};
pub use vip::UNLIMITED_CONNECTIONS;
