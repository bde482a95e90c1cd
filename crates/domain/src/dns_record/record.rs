use crate::errors::DomainError;
use crate::name::DomainName;
use std::fmt;

use super::{RecordClass, RecordData, RecordType};

/// Bytes of fixed fields between a record's name and its RDATA:
/// type (2) + class (2) + ttl (4) + rdlength (2).
const FIXED_FIELDS_LEN: usize = 10;

/// One resource record from an answer, authority or additional section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub record_type: u16,
    pub class: u16,
    pub ttl: u32,
    pub data_len: u16,
    pub data: RecordData,
}

impl ResourceRecord {
    /// Decode one record at `offset`.
    ///
    /// The returned offset is always `name_end + 10 + data_len`: compressed
    /// names inside RDATA still occupy `data_len` raw bytes on the wire.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        let (name, pos) = DomainName::from_wire(buf, offset)?;
        if pos + FIXED_FIELDS_LEN > buf.len() {
            return Err(DomainError::TruncatedMessage {
                offset: buf.len(),
                needed: pos + FIXED_FIELDS_LEN - buf.len(),
            });
        }
        let record_type = u16::from_be_bytes([buf[pos], buf[pos + 1]]);
        let class = u16::from_be_bytes([buf[pos + 2], buf[pos + 3]]);
        let ttl = u32::from_be_bytes([buf[pos + 4], buf[pos + 5], buf[pos + 6], buf[pos + 7]]);
        let data_len = u16::from_be_bytes([buf[pos + 8], buf[pos + 9]]);

        let rdata_start = pos + FIXED_FIELDS_LEN;
        let data = RecordData::decode(record_type, buf, rdata_start, usize::from(data_len))?;

        Ok((
            Self {
                name,
                record_type,
                class,
                ttl,
                data_len,
                data,
            },
            rdata_start + usize::from(data_len),
        ))
    }

    pub fn known_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.record_type)
    }

    pub fn is_address(&self) -> bool {
        matches!(self.data, RecordData::A(_) | RecordData::Aaaa(_))
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rtype = self
            .known_type()
            .map(|t| t.as_str().to_string())
            .unwrap_or_else(|| format!("TYPE{}", self.record_type));
        let class = RecordClass::from_u16(self.class)
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| format!("CLASS{}", self.class));
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, class, rtype, self.data
        )
    }
}
