//! Domain Layer
//!
//! Pure load-balancer logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Topology handed over by the control plane
//! - `value_objects/` - Closed enum tables, expected codes, rendering context
//! - `services/` - Topology to rendering-context transform
//! - `ports/` - Interfaces for file systems and drivers
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
