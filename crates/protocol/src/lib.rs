//! Shared protocol types for the portfolio comment widget
//!
//! Defines the HTTP endpoints the page talks to and the JSON records it
//! receives from them.

pub mod comment;
pub mod endpoint;

pub use comment::*;
pub use endpoint::*;

/// Errors produced while interpreting backend responses
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed comment list: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
