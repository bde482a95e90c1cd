//! Rootwalk DNS Application Layer
//!
//! The resolution use case and the ports it drives: a datagram transport
//! and a transaction-id source. Adapters live in the infrastructure crate.
pub mod ports;
pub mod use_cases;

pub use use_cases::{Resolution, ResolveDomainUseCase};
