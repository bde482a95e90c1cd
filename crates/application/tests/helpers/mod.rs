pub mod mock_transport;
pub mod wire;
