use rootwalk_dns_application::ports::TransactionIdSource;

/// Transaction ids from the thread-local fastrand generator.
#[derive(Debug, Default)]
pub struct RandomIdSource;

impl RandomIdSource {
    pub fn new() -> Self {
        Self
    }
}

impl TransactionIdSource for RandomIdSource {
    fn next_id(&self) -> u16 {
        fastrand::u16(..)
    }
}
