//! Error types for the SocialGraph library.

use thiserror::Error;

/// All errors that can occur in the SocialGraph library.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The person is already in the network.
    #[error("{0} is already in the network")]
    AlreadyExists(String),

    /// An operation referenced a person that is not in the network.
    #[error("{0} is not in the network")]
    UnknownNode(String),

    /// No chain of connections links the two people.
    #[error("No connection path between {from} and {to}")]
    NoPath { from: String, to: String },

    /// Person names must be non-empty.
    #[error("Person name must not be empty")]
    InvalidName,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl NetworkError {
    /// True for outcomes that are reported to the user but are not failures
    /// of the engine itself.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::AlreadyExists(_) | Self::NoPath { .. })
    }

    /// Process exit code for an error that ends the `socnet` binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Config(_) => 2,
            _ => 5,
        }
    }
}

/// Convenience result type for SocialGraph operations.
pub type NetworkResult<T> = Result<T, NetworkError>;
