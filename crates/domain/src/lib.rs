//! Rootwalk DNS Domain Layer
//!
//! Wire-format codec and pure types: domain names (with label compression),
//! the fixed 12-byte header, questions, resource records and whole messages.
//! No I/O happens here; buffers come in, structures come out.
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod header;
pub mod message;
pub mod name;
pub mod question;

pub use config::Config;
pub use dns_query::DnsQuery;
pub use dns_record::{RecordClass, RecordData, RecordType, ResourceRecord};
pub use errors::DomainError;
pub use header::Header;
pub use message::Message;
pub use name::DomainName;
pub use question::Question;
