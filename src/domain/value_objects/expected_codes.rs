//! Expected HTTP status codes of a health monitor
//!
//! Accepts a comma-separated list of codes and inclusive ranges
//! (`"500, 405, 404"`, `"200-204"`) and renders it as the regex alternation
//! used by `http-check expect rstatus` (`"404|405|500"`).

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{LbError, LbResult};

const MIN_STATUS: u16 = 100;
const MAX_STATUS: u16 = 599;

/// Sorted, de-duplicated set of HTTP status codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedCodes(BTreeSet<u16>);

impl ExpectedCodes {
    pub fn parse(input: &str) -> LbResult<Self> {
        let mut codes = BTreeSet::new();

        for token in input.split(',').map(str::trim) {
            if token.is_empty() {
                continue;
            }
            match token.split_once('-') {
                Some((low, high)) => {
                    let low = parse_status(low, input)?;
                    let high = parse_status(high, input)?;
                    if low > high {
                        return Err(LbError::mapping("expected_codes", input));
                    }
                    codes.extend(low..=high);
                }
                None => {
                    codes.insert(parse_status(token, input)?);
                }
            }
        }

        if codes.is_empty() {
            return Err(LbError::mapping("expected_codes", input));
        }
        Ok(Self(codes))
    }

    pub fn codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.iter().copied()
    }

    /// Pipe-joined, ascending
    pub fn to_pattern(&self) -> String {
        self.codes()
            .map(|code| code.to_string())
            .collect::<Vec<_>>()
            .join("|")
    }
}

fn parse_status(token: &str, input: &str) -> LbResult<u16> {
    token
        .trim()
        .parse::<u16>()
        .ok()
        .filter(|code| (MIN_STATUS..=MAX_STATUS).contains(code))
        .ok_or_else(|| LbError::mapping("expected_codes", input))
}

impl fmt::Display for ExpectedCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_pattern())
    }
}
