//! EntityManager port - the entity-grouped driver contract
//!
//! Newer callers address a driver per entity type (load balancer, listener,
//! pool, member, health monitor), each with create/update/delete.

use crate::domain::entities::LoadBalancer;
use crate::domain::ports::DriverStats;

/// Create/update/delete for one entity type
pub trait EntityManager {
    type Entity;
    type Context;
    type Error;

    fn create(&self, ctx: &Self::Context, entity: &Self::Entity) -> Result<(), Self::Error>;

    fn update(
        &self,
        ctx: &Self::Context,
        old: &Self::Entity,
        new: &Self::Entity,
    ) -> Result<(), Self::Error>;

    fn delete(&self, ctx: &Self::Context, entity: &Self::Entity) -> Result<(), Self::Error>;
}

/// Statistics, offered only by the load balancer manager
pub trait LoadBalancerStats: EntityManager<Entity = LoadBalancer> {
    fn stats(
        &self,
        ctx: &Self::Context,
        load_balancer: &LoadBalancer,
    ) -> Result<DriverStats, Self::Error>;
}
