//! Error types for the shared helpers

use thiserror::Error;

/// Errors raised by the environment, filesystem and network helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommonError {
    /// Environment variable is unset or empty
    #[error("Environment variable not set: {0}")]
    MissingEnvironmentVariable(String),

    /// Environment variable holds a value that cannot be interpreted
    #[error("Invalid value for environment variable {name}: {value:?}")]
    InvalidEnvironmentValue {
        /// Variable name
        name: String,
        /// Raw value found in the environment
        value: String,
    },

    /// Input is not a dotted-quad IPv4 literal
    #[error("Invalid IPv4 address: {0:?}")]
    InvalidIpv4Address(String),

    /// One or more executables could not be found on `PATH`
    #[error("Executables not reachable via PATH: {}", .0.join(", "))]
    ExecutablesNotFound(Vec<String>),
}

/// Result type for the shared helpers
pub type Result<T> = std::result::Result<T, CommonError>;
