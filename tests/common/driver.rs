//! Legacy driver doubles.

use std::sync::Mutex;

use lbforge::{DriverStats, HealthMonitor, LegacyDriver, LoadBalancer, Member, Pool, Vip};

/// Caller context, identified so forwarding can be checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: String,
}

impl RequestContext {
    pub fn new(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
        }
    }
}

/// One call received by the legacy driver, with the context's request id
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyCall {
    CreateVip { ctx: String, vip: Vip },
    UpdateVip { ctx: String, old: Vip, new: Vip },
    DeleteVip { ctx: String, vip: Vip },
    CreatePool { ctx: String, pool: Pool },
    UpdatePool { ctx: String, old: Pool, new: Pool },
    DeletePool { ctx: String, pool: Pool },
    CreateMember { ctx: String, member: Member },
    UpdateMember { ctx: String, old: Member, new: Member },
    DeleteMember { ctx: String, member: Member },
    CreateMonitor { ctx: String, monitor: HealthMonitor, pool_id: String },
    UpdateMonitor { ctx: String, old: HealthMonitor, new: HealthMonitor, pool_id: String },
    DeleteMonitor { ctx: String, monitor: HealthMonitor, pool_id: String },
    Stats { ctx: String, load_balancer_id: String },
}

/// Error raised by `RecordingDriver` when told to fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverFailure {
    pub code: u16,
    pub reason: String,
}

/// Legacy driver that records every call and optionally fails all of them
#[derive(Debug, Default)]
pub struct RecordingDriver {
    calls: Mutex<Vec<LegacyCall>>,
    failure: Option<DriverFailure>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(code: u16, reason: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(DriverFailure {
                code,
                reason: reason.to_string(),
            }),
        }
    }

    pub fn calls(&self) -> Vec<LegacyCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: LegacyCall) -> Result<(), DriverFailure> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}

impl LegacyDriver for RecordingDriver {
    type Context = RequestContext;
    type Error = DriverFailure;

    fn create_vip(&self, ctx: &RequestContext, vip: &Vip) -> Result<(), DriverFailure> {
        self.record(LegacyCall::CreateVip {
            ctx: ctx.request_id.clone(),
            vip: vip.clone(),
        })
    }

    fn update_vip(&self, ctx: &RequestContext, old: &Vip, vip: &Vip) -> Result<(), DriverFailure> {
        self.record(LegacyCall::UpdateVip {
            ctx: ctx.request_id.clone(),
            old: old.clone(),
            new: vip.clone(),
        })
    }

    fn delete_vip(&self, ctx: &RequestContext, vip: &Vip) -> Result<(), DriverFailure> {
        self.record(LegacyCall::DeleteVip {
            ctx: ctx.request_id.clone(),
            vip: vip.clone(),
        })
    }

    fn create_pool(&self, ctx: &RequestContext, pool: &Pool) -> Result<(), DriverFailure> {
        self.record(LegacyCall::CreatePool {
            ctx: ctx.request_id.clone(),
            pool: pool.clone(),
        })
    }

    fn update_pool(&self, ctx: &RequestContext, old: &Pool, pool: &Pool) -> Result<(), DriverFailure> {
        self.record(LegacyCall::UpdatePool {
            ctx: ctx.request_id.clone(),
            old: old.clone(),
            new: pool.clone(),
        })
    }

    fn delete_pool(&self, ctx: &RequestContext, pool: &Pool) -> Result<(), DriverFailure> {
        self.record(LegacyCall::DeletePool {
            ctx: ctx.request_id.clone(),
            pool: pool.clone(),
        })
    }

    fn create_member(&self, ctx: &RequestContext, member: &Member) -> Result<(), DriverFailure> {
        self.record(LegacyCall::CreateMember {
            ctx: ctx.request_id.clone(),
            member: member.clone(),
        })
    }

    fn update_member(
        &self,
        ctx: &RequestContext,
        old: &Member,
        member: &Member,
    ) -> Result<(), DriverFailure> {
        self.record(LegacyCall::UpdateMember {
            ctx: ctx.request_id.clone(),
            old: old.clone(),
            new: member.clone(),
        })
    }

    fn delete_member(&self, ctx: &RequestContext, member: &Member) -> Result<(), DriverFailure> {
        self.record(LegacyCall::DeleteMember {
            ctx: ctx.request_id.clone(),
            member: member.clone(),
        })
    }

    fn create_pool_health_monitor(
        &self,
        ctx: &RequestContext,
        monitor: &HealthMonitor,
        pool_id: &str,
    ) -> Result<(), DriverFailure> {
        self.record(LegacyCall::CreateMonitor {
            ctx: ctx.request_id.clone(),
            monitor: monitor.clone(),
            pool_id: pool_id.to_string(),
        })
    }

    fn update_pool_health_monitor(
        &self,
        ctx: &RequestContext,
        old: &HealthMonitor,
        monitor: &HealthMonitor,
        pool_id: &str,
    ) -> Result<(), DriverFailure> {
        self.record(LegacyCall::UpdateMonitor {
            ctx: ctx.request_id.clone(),
            old: old.clone(),
            new: monitor.clone(),
            pool_id: pool_id.to_string(),
        })
    }

    fn delete_pool_health_monitor(
        &self,
        ctx: &RequestContext,
        monitor: &HealthMonitor,
        pool_id: &str,
    ) -> Result<(), DriverFailure> {
        self.record(LegacyCall::DeleteMonitor {
            ctx: ctx.request_id.clone(),
            monitor: monitor.clone(),
            pool_id: pool_id.to_string(),
        })
    }

    fn stats(
        &self,
        ctx: &RequestContext,
        load_balancer: &LoadBalancer,
    ) -> Result<DriverStats, DriverFailure> {
        self.record(LegacyCall::Stats {
            ctx: ctx.request_id.clone(),
            load_balancer_id: load_balancer.id.clone(),
        })?;
        Ok(DriverStats {
            bytes_in: 1024,
            bytes_out: 4096,
            active_connections: 3,
            total_connections: 42,
        })
    }
}
