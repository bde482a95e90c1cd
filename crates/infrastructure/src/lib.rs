//! Rootwalk DNS Infrastructure Layer
//!
//! Adapters behind the application ports: the UDP wire transport and the
//! random transaction-id source.
pub mod dns;

pub use dns::transaction_id::RandomIdSource;
pub use dns::transport::UdpTransport;
