//! lbforge - HAProxy configuration compiler and legacy driver shim
//!
//! lbforge turns a load-balancer topology (load balancer, listeners, pools,
//! members, health monitors, session persistence) into a complete HAProxy
//! configuration file and replaces the file on disk atomically. It also lets
//! an entity-grouped driver interface run on top of an older VIP-centric
//! driver.
//!
//! ```no_run
//! use std::path::Path;
//! use lbforge::{ConfigRenderer, HaproxyConfigWriter, LocalFs, LoadBalancer, RendererSettings};
//!
//! # fn main() -> lbforge::LbResult<()> {
//! let settings = RendererSettings::load_or_default(Some(Path::new("/etc/lbforge.toml")))?;
//! let writer = HaproxyConfigWriter::new(ConfigRenderer::from_settings(settings)?, LocalFs::new());
//! let lb = LoadBalancer::new("lb-1", "web").with_vip_address("10.0.0.2");
//! writer.save(Path::new("/var/lib/lbforge/lb-1/haproxy.cfg"), &lb)?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{HaproxyConfigWriter, WriteOutcome};
pub use config::{ConfigWarning, RendererSettings};
pub use domain::entities::{
    HealthMonitor, Listener, LoadBalancer, LoadBalancerRef, Member, Pool, SessionPersistence,
};
pub use domain::ports::{
    DriverStats, EntityManager, FileSystem, LegacyDriver, LoadBalancerStats, Vip,
};
pub use domain::services::transform_loadbalancer;
pub use domain::value_objects::LoadBalancerContext;
pub use error::{LbError, LbResult};
pub use infrastructure::{ConfigRenderer, LocalFs, ShimDriver, StagedWrite};
