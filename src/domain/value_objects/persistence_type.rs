//! Session persistence type value object

use std::str::FromStr;

use crate::error::{LbError, LbResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistenceType {
    SourceIp,
    HttpCookie,
    AppCookie,
}

const PERSISTENCE_TYPES: [(PersistenceType, &str); 3] = [
    (PersistenceType::SourceIp, "SOURCE_IP"),
    (PersistenceType::HttpCookie, "HTTP_COOKIE"),
    (PersistenceType::AppCookie, "APP_COOKIE"),
];

impl PersistenceType {
    pub fn parse(name: &str) -> LbResult<Self> {
        let needle = name.trim();
        PERSISTENCE_TYPES
            .iter()
            .find(|(_, input)| input.eq_ignore_ascii_case(needle))
            .map(|(persistence_type, _)| *persistence_type)
            .ok_or_else(|| LbError::mapping("session persistence type", name))
    }

    pub fn name(&self) -> &'static str {
        PERSISTENCE_TYPES[*self as usize].1
    }

    pub fn is_cookie_based(&self) -> bool {
        matches!(
            self,
            PersistenceType::HttpCookie | PersistenceType::AppCookie
        )
    }
}

impl FromStr for PersistenceType {
    type Err = LbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
