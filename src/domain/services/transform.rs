//! Transform Service
//!
//! Pure mapping from the topology entities to the rendering context.
//! Enum-valued strings go through the closed tables in `value_objects`;
//! an unknown value fails the whole transform, there is no fallback.
//!
//! Free-form strings that land in the config file as a single token (section
//! names, server names, addresses, check paths) are rejected when they carry
//! whitespace or control characters.

use std::net::IpAddr;

use tracing::trace;

use crate::domain::entities::{
    HealthMonitor, Listener, LoadBalancer, Member, Pool, SessionPersistence,
};
use crate::domain::value_objects::{
    bool_str, ExpectedCodes, HealthMonitorContext, LbAlgorithm, ListenerContext,
    LoadBalancerContext, MemberContext, MonitorType, PersistenceType, PoolContext, Protocol,
    SessionPersistenceContext,
};
use crate::error::{LbError, LbResult};

/// Cookie name used for HTTP_COOKIE persistence when none is configured
pub const DEFAULT_HTTP_COOKIE_NAME: &str = "HTTP_COOKIE";

pub fn transform_loadbalancer(lb: &LoadBalancer) -> LbResult<LoadBalancerContext> {
    trace!(load_balancer_id = %lb.id, listeners = lb.listeners.len(), "transforming load balancer");

    reject_control("load balancer name", &lb.name)?;
    if let Some(address) = &lb.vip_address {
        if address.parse::<IpAddr>().is_err() {
            return Err(LbError::mapping("vip_address", address.as_str()));
        }
    }

    let listeners = lb
        .listeners
        .iter()
        .map(transform_listener)
        .collect::<LbResult<Vec<_>>>()?;

    Ok(LoadBalancerContext {
        name: lb.name.clone(),
        vip_address: lb.vip_address.clone(),
        listeners,
    })
}

pub fn transform_listener(listener: &Listener) -> LbResult<ListenerContext> {
    trace!(listener_id = %listener.id, "transforming listener");
    require_token("listener id", &listener.id)?;

    let protocol = Protocol::parse(&listener.protocol)?;
    let pool = listener
        .default_pool
        .as_ref()
        .ok_or_else(|| LbError::incomplete("listener", listener.id.as_str(), "default pool"))?;

    Ok(ListenerContext {
        id: listener.id.clone(),
        protocol_port: listener.protocol_port,
        protocol: protocol.as_str().to_string(),
        mode: protocol.haproxy_mode().to_string(),
        default_pool: transform_pool(pool)?,
        connection_limit: listener.connection_limit.filter(|limit| *limit >= 0),
    })
}

pub fn transform_pool(pool: &Pool) -> LbResult<PoolContext> {
    trace!(pool_id = %pool.id, members = pool.members.len(), "transforming pool");
    require_token("pool id", &pool.id)?;

    let protocol = Protocol::parse(&pool.protocol)?;
    let algorithm = LbAlgorithm::parse(&pool.lb_algorithm)?;

    Ok(PoolContext {
        id: pool.id.clone(),
        protocol: protocol.as_str().to_string(),
        mode: protocol.haproxy_mode().to_string(),
        lb_algorithm: algorithm.haproxy_balance().to_string(),
        members: pool
            .members
            .iter()
            .map(transform_member)
            .collect::<LbResult<Vec<_>>>()?,
        health_monitor: transform_health_monitor(pool.health_monitor.as_ref())?,
        session_persistence: transform_session_persistence(pool.session_persistence.as_ref())?,
        admin_state_up: bool_str(pool.admin_state_up),
        status: pool.status.clone(),
    })
}

pub fn transform_member(member: &Member) -> LbResult<MemberContext> {
    require_token("member id", &member.id)?;
    if member.address.parse::<IpAddr>().is_err() {
        return Err(LbError::mapping("member address", member.address.as_str()));
    }

    Ok(MemberContext {
        id: member.id.clone(),
        address: member.address.clone(),
        protocol_port: member.protocol_port,
        weight: member.weight,
        subnet_id: member.subnet_id.clone(),
        admin_state_up: bool_str(member.admin_state_up),
        status: member.status.clone(),
    })
}

pub fn transform_health_monitor(
    monitor: Option<&HealthMonitor>,
) -> LbResult<Option<HealthMonitorContext>> {
    let Some(monitor) = monitor else {
        return Ok(None);
    };
    trace!(health_monitor_id = %monitor.id, "transforming health monitor");

    let monitor_type = MonitorType::parse(&monitor.monitor_type)?;
    // Only HTTP checks send a request or look at the status code
    let expected_codes = if monitor_type.is_http() {
        require_token("http_method", &monitor.http_method)?;
        require_token("url_path", &monitor.url_path)?;
        ExpectedCodes::parse(&monitor.expected_codes)?.to_pattern()
    } else {
        String::new()
    };

    Ok(Some(HealthMonitorContext {
        id: monitor.id.clone(),
        monitor_type: monitor_type.name().to_string(),
        delay: monitor.delay,
        timeout: monitor.timeout,
        max_retries: monitor.max_retries,
        http_method: monitor.http_method.clone(),
        url_path: monitor.url_path.clone(),
        expected_codes,
        admin_state_up: bool_str(monitor.admin_state_up),
    }))
}

pub fn transform_session_persistence(
    persistence: Option<&SessionPersistence>,
) -> LbResult<Option<SessionPersistenceContext>> {
    let Some(persistence) = persistence else {
        return Ok(None);
    };

    let persistence_type = PersistenceType::parse(&persistence.persistence_type)?;
    let cookie_name = match (persistence_type, &persistence.cookie_name) {
        (PersistenceType::HttpCookie, None) => Some(DEFAULT_HTTP_COOKIE_NAME.to_string()),
        (PersistenceType::AppCookie, None) => {
            return Err(LbError::incomplete(
                "session persistence",
                persistence_type.name(),
                "cookie name",
            ))
        }
        (_, name) => name.clone(),
    };
    if let Some(name) = &cookie_name {
        require_token("cookie_name", name)?;
    }

    Ok(Some(SessionPersistenceContext {
        persistence_type: persistence_type.name().to_string(),
        cookie_name,
    }))
}

/// Non-empty, no whitespace, no control characters
fn require_token(field: &'static str, value: &str) -> LbResult<()> {
    if value.is_empty() || value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(LbError::mapping(field, value));
    }
    Ok(())
}

fn reject_control(field: &'static str, value: &str) -> LbResult<()> {
    if value.chars().any(char::is_control) {
        return Err(LbError::mapping(field, value));
    }
    Ok(())
}
