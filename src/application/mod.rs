//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `HaproxyConfigWriter` - transform, render and atomically save one load balancer

pub mod haproxy_config;

pub use haproxy_config::{HaproxyConfigWriter, WriteOutcome};
