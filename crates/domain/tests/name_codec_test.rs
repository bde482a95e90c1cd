use rootwalk_dns_domain::{DomainError, DomainName};
use std::str::FromStr;

mod helpers;
use helpers::builders::pointer;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[test]
fn test_encode_literal_vectors() {
    let cases = [
        ("dns.google.com", "03646e7306676f6f676c6503636f6d00"),
        ("www.regent.edu.gh", "0377777706726567656e740365647502676800"),
        ("bbc.co.uk", "0362626302636f02756b00"),
    ];
    for (domain, expected) in cases {
        let name = DomainName::from_str(domain).unwrap();
        assert_eq!(to_hex(&name.to_wire()), expected, "encoding {}", domain);
    }
}

#[test]
fn test_decode_literal_vectors() {
    let wire = b"\x03dns\x06google\x03com\x00";
    let (name, next) = DomainName::from_wire(wire, 0).unwrap();
    assert_eq!(name.to_string(), "dns.google.com");
    assert_eq!(next, wire.len());
}

#[test]
fn test_round_trip() {
    for domain in ["example.com", "a.b.c.d.e", "xn--bcher-kva.ch", "localhost"] {
        let name = DomainName::from_str(domain).unwrap();
        let wire = name.to_wire();
        let (decoded, next) = DomainName::from_wire(&wire, 0).unwrap();
        assert_eq!(decoded, name);
        assert_eq!(next, wire.len());
    }
}

#[test]
fn test_root_name() {
    for input in ["", "."] {
        let root = DomainName::from_str(input).unwrap();
        assert!(root.is_root());
        assert_eq!(root.to_wire(), vec![0]);
        assert_eq!(root.to_string(), ".");
    }
}

#[test]
fn test_equality_is_case_insensitive() {
    let upper = DomainName::from_str("WwW.ExAmPlE.CoM").unwrap();
    let lower = DomainName::from_str("www.example.com").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_rejects_empty_labels() {
    for input in ["a..b", ".a", "a."] {
        assert!(matches!(
            DomainName::from_str(input),
            Err(DomainError::InvalidDomainName(_))
        ));
    }
}

#[test]
fn test_rejects_oversized_label() {
    let long = "a".repeat(64);
    assert!(matches!(
        DomainName::from_str(&long),
        Err(DomainError::InvalidDomainName(_))
    ));
    // 63 bytes is still fine.
    assert!(DomainName::from_str(&"a".repeat(63)).is_ok());
}

#[test]
fn test_decode_with_compression_pointer() {
    // "foo.com" at offset 0, then "www" + pointer back to it.
    let mut buf = b"\x03foo\x03com\x00".to_vec();
    let name_start = buf.len();
    buf.extend_from_slice(b"\x03www");
    buf.extend_from_slice(&pointer(0));

    let (name, next) = DomainName::from_wire(&buf, name_start).unwrap();
    assert_eq!(name.to_string(), "www.foo.com");
    // next_offset sits right after the 2 pointer bytes, not where the
    // pointer led.
    assert_eq!(next, buf.len());
}

#[test]
fn test_pointer_chain_keeps_first_next_offset() {
    // Name with two chained pointers; the caller-visible offset is still
    // fixed by the first pointer.
    let mut buf = b"\x03com\x00".to_vec(); // offset 0
    let mid = buf.len(); // "example" + pointer to com
    buf.extend_from_slice(b"\x07example");
    buf.extend_from_slice(&pointer(0));
    let start = buf.len(); // "www" + pointer to example
    buf.extend_from_slice(b"\x03www");
    buf.extend_from_slice(&pointer(mid as u16));
    buf.extend_from_slice(b"\xff\xff"); // trailing garbage past the name

    let (name, next) = DomainName::from_wire(&buf, start).unwrap();
    assert_eq!(name.to_string(), "www.example.com");
    assert_eq!(next, start + 4 + 2);
}

#[test]
fn test_self_pointer_is_a_loop_not_a_hang() {
    // Pointer at offset 0 referencing offset 0.
    let buf = pointer(0);
    assert!(matches!(
        DomainName::from_wire(&buf, 0),
        Err(DomainError::CompressionLoop { .. })
    ));
}

#[test]
fn test_two_pointer_cycle_detected() {
    let mut buf = pointer(2);
    buf.extend_from_slice(&pointer(0));
    assert!(matches!(
        DomainName::from_wire(&buf, 0),
        Err(DomainError::CompressionLoop { .. })
    ));
}

#[test]
fn test_truncated_label() {
    // Label claims 5 bytes but only 2 remain.
    let buf = b"\x05ab".to_vec();
    assert!(matches!(
        DomainName::from_wire(&buf, 0),
        Err(DomainError::TruncatedMessage { .. })
    ));
}

#[test]
fn test_missing_terminator() {
    let buf = b"\x03foo".to_vec();
    assert!(matches!(
        DomainName::from_wire(&buf, 0),
        Err(DomainError::TruncatedMessage { .. })
    ));
}

#[test]
fn test_truncated_pointer() {
    // High byte of a pointer with no low byte.
    let buf = vec![0xC0];
    assert!(matches!(
        DomainName::from_wire(&buf, 0),
        Err(DomainError::TruncatedMessage { .. })
    ));
}

#[test]
fn test_reserved_length_prefix_rejected() {
    for prefix in [0x40u8, 0x80] {
        let buf = vec![prefix, b'a', 0];
        assert!(matches!(
            DomainName::from_wire(&buf, 0),
            Err(DomainError::MalformedMessage(_))
        ));
    }
}

#[test]
fn test_decode_lowercases_labels() {
    let buf = b"\x03FoO\x03CoM\x00";
    let (name, _) = DomainName::from_wire(buf, 0).unwrap();
    assert_eq!(name.to_string(), "foo.com");
}
