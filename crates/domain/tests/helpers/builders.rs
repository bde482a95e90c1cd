#![allow(dead_code)]

use std::str::FromStr;

use rootwalk_dns_domain::DomainName;

/// Wire-encode a textual name for hand-built test buffers.
pub fn name(s: &str) -> Vec<u8> {
    DomainName::from_str(s).unwrap().to_wire()
}

/// A 2-byte compression pointer to `offset`.
pub fn pointer(offset: u16) -> Vec<u8> {
    (0xC000 | offset).to_be_bytes().to_vec()
}

/// One resource record: owner name bytes + fixed fields + RDATA, class IN.
pub fn rr(owner: Vec<u8>, record_type: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = owner;
    out.extend_from_slice(&record_type.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}

/// Assembles whole response buffers with correct section counts.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    questions: Vec<Vec<u8>>,
    answers: Vec<Vec<u8>>,
    authorities: Vec<Vec<u8>>,
    additionals: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8000,
            questions: Vec::new(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, domain: &str, record_type: u16) -> Self {
        let mut q = name(domain);
        q.extend_from_slice(&record_type.to_be_bytes());
        q.extend_from_slice(&1u16.to_be_bytes());
        self.questions.push(q);
        self
    }

    pub fn answer(mut self, record: Vec<u8>) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: Vec<u8>) -> Self {
        self.authorities.push(record);
        self
    }

    pub fn additional(mut self, record: Vec<u8>) -> Self {
        self.additionals.push(record);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.authorities.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.additionals.len() as u16).to_be_bytes());
        for section in [self.questions, self.answers, self.authorities, self.additionals] {
            for element in section {
                out.extend_from_slice(&element);
            }
        }
        out
    }
}
