use crate::errors::DomainError;

/// Size of the fixed DNS header.
pub const HEADER_LEN: usize = 12;

/// QR bit: set in responses, clear in queries.
pub const FLAG_RESPONSE: u16 = 0x8000;

/// TC bit: the server truncated the response to fit the transport.
pub const FLAG_TRUNCATED: u16 = 0x0200;

/// The fixed 12-byte DNS message header (RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    /// Header for an outgoing standard query: one question, no flags.
    ///
    /// Recursion-desired stays clear since queries go straight to root and
    /// authoritative servers, never to a recursive resolver.
    pub fn new_query(id: u16) -> Self {
        Self {
            id,
            flags: 0,
            question_count: 1,
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
        }
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..2].copy_from_slice(&self.id.to_be_bytes());
        out[2..4].copy_from_slice(&self.flags.to_be_bytes());
        out[4..6].copy_from_slice(&self.question_count.to_be_bytes());
        out[6..8].copy_from_slice(&self.answer_count.to_be_bytes());
        out[8..10].copy_from_slice(&self.authority_count.to_be_bytes());
        out[10..12].copy_from_slice(&self.additional_count.to_be_bytes());
        out
    }

    pub fn decode(buf: &[u8]) -> Result<Self, DomainError> {
        if buf.len() < HEADER_LEN {
            return Err(DomainError::TruncatedMessage {
                offset: buf.len(),
                needed: HEADER_LEN - buf.len(),
            });
        }
        let u16_at = |i: usize| u16::from_be_bytes([buf[i], buf[i + 1]]);
        Ok(Self {
            id: u16_at(0),
            flags: u16_at(2),
            question_count: u16_at(4),
            answer_count: u16_at(6),
            authority_count: u16_at(8),
            additional_count: u16_at(10),
        })
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_RESPONSE != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & FLAG_TRUNCATED != 0
    }
}
