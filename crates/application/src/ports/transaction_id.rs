/// Source of 16-bit transaction ids for outgoing queries.
///
/// Injected so tests can supply deterministic ids; production uses a
/// random source. Ids are opaque and exist only for response correlation.
pub trait TransactionIdSource: Send + Sync {
    fn next_id(&self) -> u16;
}
