#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_dns_application::ports::{DnsTransport, TransactionIdSource};
use rootwalk_dns_domain::DomainError;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Transport fed from a script of canned replies, consumed in order.
/// Every send is recorded so tests can assert on the exact exchanges.
pub struct MockTransport {
    script: Mutex<VecDeque<Result<Vec<u8>, DomainError>>>,
    sent: Mutex<Vec<(SocketAddr, Vec<u8>)>>,
}

impl MockTransport {
    pub fn new(script: Vec<Result<Vec<u8>, DomainError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(SocketAddr, Vec<u8>)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        server: SocketAddr,
        payload: &[u8],
        _timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        self.sent
            .lock()
            .unwrap()
            .push((server, payload.to_vec()));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("mock transport script exhausted at {}", server))
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}

/// Id source handing out a single fixed id.
pub struct FixedIdSource(pub u16);

impl TransactionIdSource for FixedIdSource {
    fn next_id(&self) -> u16 {
        self.0
    }
}

/// Id source counting up from a start value, one id per walk.
pub struct SequentialIdSource(AtomicU16);

impl SequentialIdSource {
    pub fn new(start: u16) -> Self {
        Self(AtomicU16::new(start))
    }
}

impl TransactionIdSource for SequentialIdSource {
    fn next_id(&self) -> u16 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}
