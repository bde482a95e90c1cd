use crate::errors::DomainError;
use crate::name::DomainName;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use super::RecordType;

/// The typed RDATA payload of a resource record.
///
/// Name-valued payloads (NS, CNAME) may use compression into the rest of
/// the message, so they decode against the full buffer. Unfamiliar types
/// are preserved as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(DomainName),
    Cname(DomainName),
    Other(Vec<u8>),
}

impl RecordData {
    /// Decode `data_len` bytes of RDATA at `start`, dispatching on the
    /// record type code. `buf` is the whole message for pointer targets.
    pub fn decode(
        type_code: u16,
        buf: &[u8],
        start: usize,
        data_len: usize,
    ) -> Result<Self, DomainError> {
        let end = start + data_len;
        if end > buf.len() {
            return Err(DomainError::TruncatedMessage {
                offset: buf.len(),
                needed: end - buf.len(),
            });
        }
        let rdata = &buf[start..end];

        match RecordType::from_u16(type_code) {
            Some(RecordType::A) => {
                let octets: [u8; 4] = rdata.try_into().map_err(|_| {
                    DomainError::MalformedMessage(format!(
                        "A record with {} byte(s) of RDATA",
                        data_len
                    ))
                })?;
                Ok(RecordData::A(Ipv4Addr::from(octets)))
            }
            Some(RecordType::AAAA) => {
                let octets: [u8; 16] = rdata.try_into().map_err(|_| {
                    DomainError::MalformedMessage(format!(
                        "AAAA record with {} byte(s) of RDATA",
                        data_len
                    ))
                })?;
                Ok(RecordData::Aaaa(Ipv6Addr::from(octets)))
            }
            Some(RecordType::NS) => {
                let (name, _) = DomainName::from_wire(buf, start)?;
                Ok(RecordData::Ns(name))
            }
            Some(RecordType::CNAME) => {
                let (name, _) = DomainName::from_wire(buf, start)?;
                Ok(RecordData::Cname(name))
            }
            _ => Ok(RecordData::Other(rdata.to_vec())),
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Aaaa(addr) => write!(f, "{}", addr),
            RecordData::Ns(name) | RecordData::Cname(name) => write!(f, "{}", name),
            RecordData::Other(bytes) => {
                for b in bytes {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
        }
    }
}
