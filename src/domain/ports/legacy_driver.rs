//! LegacyDriver port - the flat, VIP-centric driver contract
//!
//! Older drivers know four things: a VIP (address + port + protocol), pools,
//! members and health monitors attached to a pool. The shim re-expresses
//! entity-grouped calls in this vocabulary.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{HealthMonitor, LoadBalancer, Member, Pool, SessionPersistence};

/// Virtual IP as understood by a legacy driver
///
/// Conflates the load balancer's address with a listener's port, protocol
/// and connection limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vip {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub subnet_id: Option<String>,
    pub protocol: Option<String>,
    pub protocol_port: Option<u16>,
    /// -1 means unlimited
    pub connection_limit: i64,
    pub pool_id: Option<String>,
    pub session_persistence: Option<SessionPersistence>,
    pub admin_state_up: bool,
}

/// Traffic counters reported by a driver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverStats {
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub active_connections: u64,
    pub total_connections: u64,
}

/// The wrapped driver's contract
///
/// The driver picks its own request context and error types; lbforge
/// forwards the context by reference and never inspects or wraps errors.
pub trait LegacyDriver {
    type Context;
    type Error;

    fn create_vip(&self, ctx: &Self::Context, vip: &Vip) -> Result<(), Self::Error>;

    fn update_vip(&self, ctx: &Self::Context, old_vip: &Vip, vip: &Vip)
        -> Result<(), Self::Error>;

    fn delete_vip(&self, ctx: &Self::Context, vip: &Vip) -> Result<(), Self::Error>;

    fn create_pool(&self, ctx: &Self::Context, pool: &Pool) -> Result<(), Self::Error>;

    fn update_pool(&self, ctx: &Self::Context, old_pool: &Pool, pool: &Pool)
        -> Result<(), Self::Error>;

    fn delete_pool(&self, ctx: &Self::Context, pool: &Pool) -> Result<(), Self::Error>;

    fn create_member(&self, ctx: &Self::Context, member: &Member) -> Result<(), Self::Error>;

    fn update_member(
        &self,
        ctx: &Self::Context,
        old_member: &Member,
        member: &Member,
    ) -> Result<(), Self::Error>;

    fn delete_member(&self, ctx: &Self::Context, member: &Member) -> Result<(), Self::Error>;

    fn create_pool_health_monitor(
        &self,
        ctx: &Self::Context,
        health_monitor: &HealthMonitor,
        pool_id: &str,
    ) -> Result<(), Self::Error>;

    fn update_pool_health_monitor(
        &self,
        ctx: &Self::Context,
        old_health_monitor: &HealthMonitor,
        health_monitor: &HealthMonitor,
        pool_id: &str,
    ) -> Result<(), Self::Error>;

    fn delete_pool_health_monitor(
        &self,
        ctx: &Self::Context,
        health_monitor: &HealthMonitor,
        pool_id: &str,
    ) -> Result<(), Self::Error>;

    fn stats(
        &self,
        ctx: &Self::Context,
        load_balancer: &LoadBalancer,
    ) -> Result<DriverStats, Self::Error>;
}
