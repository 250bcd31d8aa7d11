//! Load-balancing algorithm value object

use std::fmt;
use std::str::FromStr;

use crate::error::{LbError, LbResult};

/// Pool balancing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LbAlgorithm {
    RoundRobin,
    LeastConnections,
    SourceIp,
}

/// (variant, input name, HAProxy `balance` keyword)
pub(crate) const LB_ALGORITHMS: [(LbAlgorithm, &str, &str); 3] = [
    (LbAlgorithm::RoundRobin, "ROUND_ROBIN", "roundrobin"),
    (LbAlgorithm::LeastConnections, "LEAST_CONNECTIONS", "leastconn"),
    (LbAlgorithm::SourceIp, "SOURCE_IP", "source"),
];

impl LbAlgorithm {
    pub fn parse(name: &str) -> LbResult<Self> {
        let needle = name.trim();
        LB_ALGORITHMS
            .iter()
            .find(|(_, input, _)| input.eq_ignore_ascii_case(needle))
            .map(|(algorithm, _, _)| *algorithm)
            .ok_or_else(|| LbError::mapping("lb_algorithm", name))
    }

    pub fn name(&self) -> &'static str {
        LB_ALGORITHMS[*self as usize].1
    }

    /// Keyword for the backend `balance` line
    pub fn haproxy_balance(&self) -> &'static str {
        LB_ALGORITHMS[*self as usize].2
    }
}

impl FromStr for LbAlgorithm {
    type Err = LbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LbAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
