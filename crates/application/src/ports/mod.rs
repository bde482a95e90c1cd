mod transaction_id;
mod transport;

pub use transaction_id::TransactionIdSource;
pub use transport::DnsTransport;

// Re-export for convenience
pub use rootwalk_dns_domain::DnsQuery;
