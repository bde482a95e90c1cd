use crate::dns_record::{RecordClass, RecordType};
use crate::errors::DomainError;
use crate::name::DomainName;
use std::fmt;

/// One entry of the question section: what is being asked.
///
/// Type and class are kept as raw codes so unfamiliar values echoed by a
/// server survive a decode round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub record_type: u16,
    pub class: u16,
}

impl Question {
    pub fn new(name: DomainName, record_type: RecordType) -> Self {
        Self {
            name,
            record_type: record_type.to_u16(),
            class: RecordClass::In.to_u16(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.name.to_wire();
        out.extend_from_slice(&self.record_type.to_be_bytes());
        out.extend_from_slice(&self.class.to_be_bytes());
        out
    }

    /// Decode a question at `offset`; the name may use compression.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        let (name, pos) = DomainName::from_wire(buf, offset)?;
        let end = pos + 4;
        if end > buf.len() {
            return Err(DomainError::TruncatedMessage {
                offset: buf.len(),
                needed: end - buf.len(),
            });
        }
        let record_type = u16::from_be_bytes([buf[pos], buf[pos + 1]]);
        let class = u16::from_be_bytes([buf[pos + 2], buf[pos + 3]]);
        Ok((
            Self {
                name,
                record_type,
                class,
            },
            end,
        ))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rtype = RecordType::from_u16(self.record_type)
            .map(|t| t.as_str().to_string())
            .unwrap_or_else(|| format!("TYPE{}", self.record_type));
        let class = RecordClass::from_u16(self.class)
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| format!("CLASS{}", self.class));
        write!(f, "{} {} {}", self.name, class, rtype)
    }
}
