//! Error types for the succinct trie.

use thiserror::Error;

/// Error variants for trie operations.
///
/// Building a trie and querying it never fail; errors arise only at the
/// serialization boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Persisted data failed validation during decoding.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// An I/O error occurred during serialization or deserialization.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for trie operations.
pub type Result<T> = std::result::Result<T, Error>;
