//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod entity_manager;
pub mod file_system;
pub mod legacy_driver;

pub use entity_manager::{EntityManager, LoadBalancerStats};
#[cfg(test)]
pub use file_system::MockFileSystem;
pub use file_system::FileSystem;
pub use legacy_driver::{DriverStats, LegacyDriver, Vip};
