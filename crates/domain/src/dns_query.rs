use super::{DomainName, RecordType};
use crate::errors::DomainError;
use std::fmt;
use std::sync::Arc;

/// One name/type pair a caller wants resolved.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// The domain as a validated name, rejecting malformed input before
    /// any wire encoding happens.
    pub fn name(&self) -> Result<DomainName, DomainError> {
        self.domain.parse()
    }
}

impl fmt::Display for DnsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.domain, self.record_type)
    }
}
