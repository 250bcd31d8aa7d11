//! Health monitor type value object

use std::str::FromStr;

use crate::error::{LbError, LbResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonitorType {
    Http,
    Https,
    Tcp,
    Ping,
}

const MONITOR_TYPES: [(MonitorType, &str); 4] = [
    (MonitorType::Http, "HTTP"),
    (MonitorType::Https, "HTTPS"),
    (MonitorType::Tcp, "TCP"),
    (MonitorType::Ping, "PING"),
];

impl MonitorType {
    pub fn parse(name: &str) -> LbResult<Self> {
        let needle = name.trim();
        MONITOR_TYPES
            .iter()
            .find(|(_, input)| input.eq_ignore_ascii_case(needle))
            .map(|(monitor_type, _)| *monitor_type)
            .ok_or_else(|| LbError::mapping("health monitor type", name))
    }

    pub fn name(&self) -> &'static str {
        MONITOR_TYPES[*self as usize].1
    }

    /// HTTP and HTTPS monitors issue a request and check the status code
    pub fn is_http(&self) -> bool {
        matches!(self, MonitorType::Http | MonitorType::Https)
    }
}

impl FromStr for MonitorType {
    type Err = LbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
