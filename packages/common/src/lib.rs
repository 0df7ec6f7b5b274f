//! Common infrastructure shared by the certid crates
//!
//! This crate provides the process-level glue that surrounds the identity
//! and key pipeline:
//! - Logging setup and identity redaction
//! - Environment variable accessors
//! - File and executable predicates
//! - IPv4 literal validation

#![forbid(unsafe_code)]

pub mod env;
pub mod error;
pub mod fs;
pub mod logging;
pub mod net;

pub use error::{CommonError, Result};
pub use logging::LoggingTransformer;
