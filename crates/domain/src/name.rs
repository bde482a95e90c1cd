use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Maximum length of a single label on the wire (RFC 1035 §2.3.4).
pub const MAX_LABEL_LEN: usize = 63;

/// Upper bound on compression-pointer dereferences while decoding one name.
/// A self- or forward-pointing pointer would otherwise loop forever.
const MAX_POINTER_HOPS: usize = 20;

const POINTER_MASK: u8 = 0xC0;

/// A domain name as an ordered sequence of labels.
///
/// Labels are stored lowercase, so equality is case-insensitive the way
/// DNS name matching requires. The root name has no labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<String>,
}

impl DomainName {
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Wire-encode as `[len][bytes]` per label plus the terminating zero.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1);
        for label in &self.labels {
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
        out.push(0);
        out
    }

    /// Decode a name starting at `offset`, following compression pointers.
    ///
    /// Returns the name and the offset of the first byte after it in the
    /// original buffer: pointers never advance the caller-visible position
    /// past the two pointer bytes, no matter where they lead.
    pub fn from_wire(buf: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        let mut labels = Vec::new();
        let mut pos = offset;
        let mut next_offset = None;
        let mut hops = 0usize;

        loop {
            let len_byte = *buf.get(pos).ok_or(DomainError::TruncatedMessage {
                offset: pos,
                needed: 1,
            })?;

            if len_byte & POINTER_MASK == POINTER_MASK {
                let low = *buf.get(pos + 1).ok_or(DomainError::TruncatedMessage {
                    offset: pos + 1,
                    needed: 1,
                })?;
                if next_offset.is_none() {
                    next_offset = Some(pos + 2);
                }
                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(DomainError::CompressionLoop { offset: pos });
                }
                pos = usize::from(len_byte & !POINTER_MASK) << 8 | usize::from(low);
            } else if len_byte == 0 {
                if next_offset.is_none() {
                    next_offset = Some(pos + 1);
                }
                break;
            } else if len_byte & POINTER_MASK != 0 {
                // 0x40/0x80 prefixes are reserved, not valid label lengths.
                return Err(DomainError::MalformedMessage(format!(
                    "reserved label length {:#04x} at offset {}",
                    len_byte, pos
                )));
            } else {
                let len = usize::from(len_byte);
                let end = pos + 1 + len;
                if end > buf.len() {
                    return Err(DomainError::TruncatedMessage {
                        offset: buf.len(),
                        needed: end - buf.len(),
                    });
                }
                let label = String::from_utf8_lossy(&buf[pos + 1..end]).to_lowercase();
                labels.push(label);
                pos = end;
            }
        }

        Ok((Self { labels }, next_offset.unwrap_or(pos + 1)))
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "." {
            return Ok(Self::root());
        }
        let mut labels = Vec::new();
        for label in s.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    s
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' exceeds {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
            labels.push(label.to_lowercase());
        }
        Ok(Self { labels })
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, ".");
        }
        write!(f, "{}", self.labels.join("."))
    }
}
