//! All data types for the SocialGraph library.

pub mod config;
pub mod error;
pub mod person;

pub use config::{CliConfig, CliOverrides, GraphConfig, OutputFormat};
pub use error::{NetworkError, NetworkResult};
pub use person::Person;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
