pub mod transaction_id;
pub mod transport;
