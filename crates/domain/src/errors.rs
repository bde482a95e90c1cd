use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Message truncated: need {needed} more byte(s) at offset {offset}")]
    TruncatedMessage { offset: usize, needed: usize },

    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    #[error("Compression pointer loop at offset {offset}")]
    CompressionLoop { offset: usize },

    #[error("Referral limit exceeded after {hops} hops")]
    ReferralLoop { hops: u8 },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Query to {server} timed out")]
    QueryTimeout { server: String },

    #[error("Transaction id mismatch in response from {server}")]
    SpoofedResponse { server: String },

    #[error("Response from {server} carried neither answer nor delegation")]
    NoAnswerOrDelegation { server: String },

    #[error("Referral from {server} names {name_server} but no address could be found for it")]
    MissingGlue { server: String, name_server: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
