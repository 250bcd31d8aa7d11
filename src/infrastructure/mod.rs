//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic replace
//! - `template/` - minijinja-based HAProxy config renderer
//! - `shim/` - Entity-grouped facade over a legacy VIP driver

pub mod fs;
pub mod shim;
pub mod template;

// Re-export for convenience
pub use fs::{LocalFs, StagedWrite};
pub use shim::ShimDriver;
pub use template::ConfigRenderer;
