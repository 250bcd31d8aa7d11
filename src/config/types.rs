//! Renderer settings type definitions
//!
//! The fixed process-wide policy of the generated HAProxy file: the
//! `global` and `defaults` sections, plus an optional custom template.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LbResult;

use super::loader::{self, ConfigWarning};

/// `global` section policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    pub user: String,
    pub group: String,
    /// One `log` line per entry, e.g. `/dev/log local0`
    pub log_targets: Vec<String>,
    pub stats_socket_path: PathBuf,
    pub stats_socket_mode: String,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            user: "nobody".to_string(),
            group: "nogroup".to_string(),
            log_targets: vec![
                "/dev/log local0".to_string(),
                "/dev/log local1 notice".to_string(),
            ],
            stats_socket_path: PathBuf::from("/var/run/haproxy/stats.sock"),
            stats_socket_mode: "0666".to_string(),
        }
    }
}

/// `defaults` section policy (timeouts in milliseconds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSettings {
    pub retries: u32,
    pub timeout_connect: u64,
    pub timeout_client: u64,
    pub timeout_server: u64,
}

impl Default for DefaultsSettings {
    fn default() -> Self {
        Self {
            retries: 3,
            timeout_connect: 5000,
            timeout_client: 50000,
            timeout_server: 50000,
        }
    }
}

/// Settings consumed by the config renderer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    pub global: GlobalSettings,
    pub defaults: DefaultsSettings,
    /// Custom template replacing the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl RendererSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> LbResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load settings and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LbResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the given file when it exists, otherwise built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> LbResult<Self> {
        loader::load_or_default(path)
    }

    /// Same settings with a different stats socket
    pub fn with_stats_socket(mut self, path: impl Into<PathBuf>) -> Self {
        self.global.stats_socket_path = path.into();
        self
    }

    /// Same settings with a different process group
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.global.group = group.into();
        self
    }
}
