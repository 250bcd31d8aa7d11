//! Protocol value object - listener and pool protocols

use std::fmt;
use std::str::FromStr;

use crate::error::{LbError, LbResult};

/// Protocol spoken by a listener or pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    Https,
    Tcp,
}

/// (variant, input name, rendered name, HAProxy mode)
static PROTOCOLS: [(Protocol, &str, &str, &str); 3] = [
    (Protocol::Http, "HTTP", "http", "http"),
    (Protocol::Https, "HTTPS", "https", "tcp"),
    (Protocol::Tcp, "TCP", "tcp", "tcp"),
];

impl Protocol {
    /// Look up a protocol name, ignoring case
    pub fn parse(name: &str) -> LbResult<Self> {
        let needle = name.trim();
        PROTOCOLS
            .iter()
            .find(|(_, input, _, _)| input.eq_ignore_ascii_case(needle))
            .map(|(protocol, _, _, _)| *protocol)
            .ok_or_else(|| LbError::mapping("protocol", name))
    }

    fn entry(&self) -> &'static (Protocol, &'static str, &'static str, &'static str) {
        // every variant has exactly one row
        &PROTOCOLS[*self as usize]
    }

    /// Canonical upper-case name
    pub fn name(&self) -> &'static str {
        self.entry().1
    }

    /// Lower-cased name used in the rendering context
    pub fn as_str(&self) -> &'static str {
        self.entry().2
    }

    /// HAProxy `mode`; HTTPS is passed through as TCP
    pub fn haproxy_mode(&self) -> &'static str {
        self.entry().3
    }
}

impl FromStr for Protocol {
    type Err = LbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
