//! Renderer settings
//!
//! Settings come from an optional TOML file; anything not set falls back to
//! the built-in HAProxy policy:
//!
//! ```toml
//! [global]
//! user = "nobody"
//! group = "nogroup"
//! log_targets = ["/dev/log local0", "/dev/log local1 notice"]
//! stats_socket_path = "/var/run/haproxy/stats.sock"
//! stats_socket_mode = "0666"
//!
//! [defaults]
//! retries = 3
//! timeout_connect = 5000
//! timeout_client = 50000
//! timeout_server = 50000
//! ```

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{DefaultsSettings, GlobalSettings, RendererSettings};
