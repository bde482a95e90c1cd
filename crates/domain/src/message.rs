use crate::dns_record::ResourceRecord;
use crate::errors::DomainError;
use crate::header::{Header, HEADER_LEN};
use crate::question::Question;

/// A whole DNS message: header plus the four wire sections.
///
/// Section lists are growable and sized by the header counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    /// Encode a single-question standard query.
    pub fn build_query(id: u16, question: &Question) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + question.name.to_wire().len() + 4);
        out.extend_from_slice(&Header::new_query(id).encode());
        out.extend_from_slice(&question.encode());
        out
    }

    /// Whether the raw response bytes correlate with transaction `id`.
    ///
    /// This runs on the undecoded buffer, before any parsing: it is the
    /// sole spoofing/cross-talk defense. Responses shorter than two bytes
    /// simply fail to match.
    pub fn matches_transaction(id: u16, response: &[u8]) -> bool {
        match response {
            [hi, lo, ..] => u16::from_be_bytes([*hi, *lo]) == id,
            _ => false,
        }
    }

    /// Parse a response buffer into header, questions and record sections,
    /// threading the offset through each variable-length element.
    pub fn parse(buf: &[u8]) -> Result<Self, DomainError> {
        let header = Header::decode(buf)?;
        let mut offset = HEADER_LEN;

        let mut questions = Vec::with_capacity(usize::from(header.question_count));
        for _ in 0..header.question_count {
            let (question, next) = Question::decode(buf, offset)?;
            questions.push(question);
            offset = next;
        }

        let decode_section = |count: u16, offset: &mut usize| {
            let mut records = Vec::with_capacity(usize::from(count));
            for _ in 0..count {
                let (record, next) = ResourceRecord::decode(buf, *offset)?;
                records.push(record);
                *offset = next;
            }
            Ok::<_, DomainError>(records)
        };

        let answers = decode_section(header.answer_count, &mut offset)?;
        let authorities = decode_section(header.authority_count, &mut offset)?;
        let additionals = decode_section(header.additional_count, &mut offset)?;

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}
