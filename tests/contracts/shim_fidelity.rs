//! Shim fidelity contracts (SHIM-001 through SHIM-003)
//!
//! Every grouped call becomes exactly one legacy call, with the same context
//! and arguments derived from the original entity.

use lbforge::{EntityManager, LoadBalancerStats, ShimDriver, Vip};

use crate::common::*;

fn shim() -> ShimDriver<RecordingDriver> {
    ShimDriver::new(RecordingDriver::new())
}

/// CONTRACT SHIM-001: one legacy call per grouped call, context forwarded
mod one_call_per_operation {
    use super::*;

    #[test]
    fn contract_load_balancer_operations() {
        let shim = shim();
        let ctx = RequestContext::new("req-lb");
        let lb = sample_loadbalancer();
        let vip = Vip::from_load_balancer(&lb);

        shim.load_balancer().create(&ctx, &lb).unwrap();
        shim.load_balancer().update(&ctx, &lb, &lb).unwrap();
        shim.load_balancer().delete(&ctx, &lb).unwrap();
        let stats = shim.load_balancer().stats(&ctx, &lb).unwrap();

        assert_eq!(stats.total_connections, 42);
        assert_eq!(
            shim.wrapped().calls(),
            vec![
                LegacyCall::CreateVip { ctx: "req-lb".into(), vip: vip.clone() },
                LegacyCall::UpdateVip { ctx: "req-lb".into(), old: vip.clone(), new: vip.clone() },
                LegacyCall::DeleteVip { ctx: "req-lb".into(), vip },
                LegacyCall::Stats { ctx: "req-lb".into(), load_balancer_id: SAMPLE_LB_ID.into() },
            ]
        );
    }

    #[test]
    fn contract_pool_member_monitor_operations_pass_entities_through() {
        let shim = shim();
        let ctx = RequestContext::new("req-pool");
        let pool = sample_pool();
        let member = pool.members[0].clone();
        let monitor = sample_health_monitor();

        shim.pool().create(&ctx, &pool).unwrap();
        shim.member().update(&ctx, &member, &member).unwrap();
        shim.health_monitor().delete(&ctx, &monitor).unwrap();

        assert_eq!(
            shim.wrapped().calls(),
            vec![
                LegacyCall::CreatePool { ctx: "req-pool".into(), pool },
                LegacyCall::UpdateMember {
                    ctx: "req-pool".into(),
                    old: member.clone(),
                    new: member,
                },
                LegacyCall::DeleteMonitor {
                    ctx: "req-pool".into(),
                    monitor,
                    pool_id: SAMPLE_POOL_ID.into(),
                },
            ]
        );
    }
}

/// CONTRACT SHIM-002: synthesized VIPs carry the entity's own data
mod vip_synthesis {
    use super::*;

    #[test]
    fn contract_load_balancer_vip_uses_first_listener() {
        let shim = shim();
        let lb = two_listener_loadbalancer();

        shim.load_balancer()
            .create(&RequestContext::new("req"), &lb)
            .unwrap();

        match &shim.wrapped().calls()[..] {
            [LegacyCall::CreateVip { vip, .. }] => {
                assert_eq!(vip.id, SAMPLE_LB_ID);
                assert_eq!(vip.address.as_deref(), Some("10.0.0.2"));
                assert_eq!(vip.protocol.as_deref(), Some("HTTP"));
                assert_eq!(vip.protocol_port, Some(80));
                assert_eq!(vip.connection_limit, 98);
                assert_eq!(vip.pool_id.as_deref(), Some(SAMPLE_POOL_ID));
            }
            calls => panic!("unexpected calls {calls:?}"),
        }
    }

    #[test]
    fn contract_listener_vip_uses_parent_address_and_own_port() {
        let shim = shim();
        let lb = two_listener_loadbalancer();

        shim.listener()
            .create(&RequestContext::new("req"), &lb.listeners[1])
            .unwrap();

        match &shim.wrapped().calls()[..] {
            [LegacyCall::CreateVip { vip, .. }] => {
                assert_eq!(vip.id, "ssh_listener");
                assert_eq!(vip.address.as_deref(), Some("10.0.0.2"));
                assert_eq!(vip.protocol.as_deref(), Some("TCP"));
                assert_eq!(vip.protocol_port, Some(22));
                assert_eq!(vip.connection_limit, -1);
                assert_eq!(vip.pool_id.as_deref(), Some("ssh_pool"));
            }
            calls => panic!("unexpected calls {calls:?}"),
        }
    }

    #[test]
    fn contract_monitor_calls_use_monitor_pool_id() {
        let shim = shim();
        let ctx = RequestContext::new("req");
        let monitor = sample_health_monitor();

        shim.health_monitor().create(&ctx, &monitor).unwrap();

        match &shim.wrapped().calls()[..] {
            [LegacyCall::CreateMonitor { pool_id, monitor: forwarded, .. }] => {
                assert_eq!(pool_id, SAMPLE_POOL_ID);
                assert_eq!(forwarded, &monitor);
            }
            calls => panic!("unexpected calls {calls:?}"),
        }
    }
}

/// CONTRACT SHIM-003: wrapped driver errors reach the caller unchanged
mod error_identity {
    use super::*;

    #[test]
    fn contract_driver_error_is_returned_as_is() {
        let shim = ShimDriver::new(RecordingDriver::failing(503, "backend unavailable"));
        let ctx = RequestContext::new("req");

        let err = shim.pool().delete(&ctx, &sample_pool()).unwrap_err();
        assert_eq!(
            err,
            DriverFailure {
                code: 503,
                reason: "backend unavailable".into(),
            }
        );

        let err = shim
            .load_balancer()
            .stats(&ctx, &sample_loadbalancer())
            .unwrap_err();
        assert_eq!(err.code, 503);

        // the failing call was still made exactly once each
        assert_eq!(shim.wrapped().calls().len(), 2);
    }
}
