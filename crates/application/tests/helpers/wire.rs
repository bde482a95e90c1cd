#![allow(dead_code)]

use rootwalk_dns_domain::DomainName;
use std::str::FromStr;

/// Wire-encode a textual name for hand-built response buffers.
pub fn name(s: &str) -> Vec<u8> {
    DomainName::from_str(s).unwrap().to_wire()
}

/// One class-IN resource record.
pub fn rr(owner: &str, record_type: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = name(owner);
    out.extend_from_slice(&record_type.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}

/// A referral: no answers, NS records in authority, optional glue.
pub fn referral(id: u16, zone: &str, ns: &str, glue: Option<[u8; 4]>) -> Vec<u8> {
    let authority = rr(zone, 2, 172800, &name(ns));
    let additionals: Vec<Vec<u8>> = glue
        .map(|addr| vec![rr(ns, 1, 172800, &addr)])
        .unwrap_or_default();
    build(id, &[], &[authority], &additionals)
}

/// A direct answer carrying one A record.
pub fn answer(id: u16, domain: &str, addr: [u8; 4]) -> Vec<u8> {
    build(id, &[rr(domain, 1, 300, &addr)], &[], &[])
}

/// A response with all sections empty (NXDOMAIN-shaped).
pub fn empty_response(id: u16) -> Vec<u8> {
    build(id, &[], &[], &[])
}

pub fn build(
    id: u16,
    answers: &[Vec<u8>],
    authorities: &[Vec<u8>],
    additionals: &[Vec<u8>],
) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&id.to_be_bytes());
    out.extend_from_slice(&0x8000u16.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    out.extend_from_slice(&(authorities.len() as u16).to_be_bytes());
    out.extend_from_slice(&(additionals.len() as u16).to_be_bytes());
    for section in [answers, authorities, additionals] {
        for element in section {
            out.extend_from_slice(element);
        }
    }
    out
}
