//! Entity-grouped facade over a legacy driver
//!
//! Every call on a manager produces exactly one call on the wrapped driver,
//! with the caller's context passed through by reference. Errors from the
//! wrapped driver are returned unchanged.

use tracing::debug;

use crate::domain::entities::{HealthMonitor, Listener, LoadBalancer, Member, Pool};
use crate::domain::ports::{DriverStats, EntityManager, LegacyDriver, LoadBalancerStats, Vip};

/// Exposes a [`LegacyDriver`] through per-entity [`EntityManager`]s
#[derive(Debug, Clone, Default)]
pub struct ShimDriver<D> {
    driver: D,
}

impl<D: LegacyDriver> ShimDriver<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The wrapped driver
    pub fn wrapped(&self) -> &D {
        &self.driver
    }

    pub fn into_wrapped(self) -> D {
        self.driver
    }

    pub fn load_balancer(&self) -> LoadBalancerManager<'_, D> {
        LoadBalancerManager {
            driver: &self.driver,
        }
    }

    pub fn listener(&self) -> ListenerManager<'_, D> {
        ListenerManager {
            driver: &self.driver,
        }
    }

    pub fn pool(&self) -> PoolManager<'_, D> {
        PoolManager {
            driver: &self.driver,
        }
    }

    pub fn member(&self) -> MemberManager<'_, D> {
        MemberManager {
            driver: &self.driver,
        }
    }

    pub fn health_monitor(&self) -> HealthMonitorManager<'_, D> {
        HealthMonitorManager {
            driver: &self.driver,
        }
    }
}

/// Load balancer operations, forwarded as VIP operations
#[derive(Debug)]
pub struct LoadBalancerManager<'a, D> {
    driver: &'a D,
}

/// Listener operations, forwarded as VIP operations
#[derive(Debug)]
pub struct ListenerManager<'a, D> {
    driver: &'a D,
}

#[derive(Debug)]
pub struct PoolManager<'a, D> {
    driver: &'a D,
}

#[derive(Debug)]
pub struct MemberManager<'a, D> {
    driver: &'a D,
}

/// Health monitor operations, forwarded with the monitor's pool id
#[derive(Debug)]
pub struct HealthMonitorManager<'a, D> {
    driver: &'a D,
}

impl<D: LegacyDriver> EntityManager for LoadBalancerManager<'_, D> {
    type Entity = LoadBalancer;
    type Context = D::Context;
    type Error = D::Error;

    fn create(&self, ctx: &D::Context, entity: &LoadBalancer) -> Result<(), D::Error> {
        debug!(id = %entity.id, op = "create_vip", "forwarding load balancer");
        self.driver.create_vip(ctx, &Vip::from_load_balancer(entity))
    }

    fn update(
        &self,
        ctx: &D::Context,
        old: &LoadBalancer,
        new: &LoadBalancer,
    ) -> Result<(), D::Error> {
        debug!(id = %new.id, op = "update_vip", "forwarding load balancer");
        self.driver.update_vip(
            ctx,
            &Vip::from_load_balancer(old),
            &Vip::from_load_balancer(new),
        )
    }

    fn delete(&self, ctx: &D::Context, entity: &LoadBalancer) -> Result<(), D::Error> {
        debug!(id = %entity.id, op = "delete_vip", "forwarding load balancer");
        self.driver.delete_vip(ctx, &Vip::from_load_balancer(entity))
    }
}

impl<D: LegacyDriver> LoadBalancerStats for LoadBalancerManager<'_, D> {
    fn stats(
        &self,
        ctx: &D::Context,
        load_balancer: &LoadBalancer,
    ) -> Result<DriverStats, D::Error> {
        debug!(id = %load_balancer.id, op = "stats", "forwarding load balancer");
        self.driver.stats(ctx, load_balancer)
    }
}

impl<D: LegacyDriver> EntityManager for ListenerManager<'_, D> {
    type Entity = Listener;
    type Context = D::Context;
    type Error = D::Error;

    fn create(&self, ctx: &D::Context, entity: &Listener) -> Result<(), D::Error> {
        debug!(id = %entity.id, op = "create_vip", "forwarding listener");
        self.driver.create_vip(ctx, &Vip::from_listener(entity))
    }

    fn update(&self, ctx: &D::Context, old: &Listener, new: &Listener) -> Result<(), D::Error> {
        debug!(id = %new.id, op = "update_vip", "forwarding listener");
        self.driver
            .update_vip(ctx, &Vip::from_listener(old), &Vip::from_listener(new))
    }

    fn delete(&self, ctx: &D::Context, entity: &Listener) -> Result<(), D::Error> {
        debug!(id = %entity.id, op = "delete_vip", "forwarding listener");
        self.driver.delete_vip(ctx, &Vip::from_listener(entity))
    }
}

impl<D: LegacyDriver> EntityManager for PoolManager<'_, D> {
    type Entity = Pool;
    type Context = D::Context;
    type Error = D::Error;

    fn create(&self, ctx: &D::Context, entity: &Pool) -> Result<(), D::Error> {
        debug!(id = %entity.id, op = "create_pool", "forwarding pool");
        self.driver.create_pool(ctx, entity)
    }

    fn update(&self, ctx: &D::Context, old: &Pool, new: &Pool) -> Result<(), D::Error> {
        debug!(id = %new.id, op = "update_pool", "forwarding pool");
        self.driver.update_pool(ctx, old, new)
    }

    fn delete(&self, ctx: &D::Context, entity: &Pool) -> Result<(), D::Error> {
        debug!(id = %entity.id, op = "delete_pool", "forwarding pool");
        self.driver.delete_pool(ctx, entity)
    }
}

impl<D: LegacyDriver> EntityManager for MemberManager<'_, D> {
    type Entity = Member;
    type Context = D::Context;
    type Error = D::Error;

    fn create(&self, ctx: &D::Context, entity: &Member) -> Result<(), D::Error> {
        debug!(id = %entity.id, op = "create_member", "forwarding member");
        self.driver.create_member(ctx, entity)
    }

    fn update(&self, ctx: &D::Context, old: &Member, new: &Member) -> Result<(), D::Error> {
        debug!(id = %new.id, op = "update_member", "forwarding member");
        self.driver.update_member(ctx, old, new)
    }

    fn delete(&self, ctx: &D::Context, entity: &Member) -> Result<(), D::Error> {
        debug!(id = %entity.id, op = "delete_member", "forwarding member");
        self.driver.delete_member(ctx, entity)
    }
}

impl<D: LegacyDriver> EntityManager for HealthMonitorManager<'_, D> {
    type Entity = HealthMonitor;
    type Context = D::Context;
    type Error = D::Error;

    fn create(&self, ctx: &D::Context, entity: &HealthMonitor) -> Result<(), D::Error> {
        debug!(
            id = %entity.id,
            pool_id = %entity.pool_id,
            op = "create_pool_health_monitor",
            "forwarding health monitor"
        );
        self.driver
            .create_pool_health_monitor(ctx, entity, &entity.pool_id)
    }

    fn update(
        &self,
        ctx: &D::Context,
        old: &HealthMonitor,
        new: &HealthMonitor,
    ) -> Result<(), D::Error> {
        debug!(
            id = %new.id,
            pool_id = %new.pool_id,
            op = "update_pool_health_monitor",
            "forwarding health monitor"
        );
        self.driver
            .update_pool_health_monitor(ctx, old, new, &new.pool_id)
    }

    fn delete(&self, ctx: &D::Context, entity: &HealthMonitor) -> Result<(), D::Error> {
        debug!(
            id = %entity.id,
            pool_id = %entity.pool_id,
            op = "delete_pool_health_monitor",
            "forwarding health monitor"
        );
        self.driver
            .delete_pool_health_monitor(ctx, entity, &entity.pool_id)
    }
}
