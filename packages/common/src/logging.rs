//! Structured logging setup
//!
//! Provides env_logger-based process logging and redaction of identity values
//! so that client names never reach the log in clear text.

use log::{debug, info, warn, LevelFilter};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Process logging setup using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above (recommended for production)
    /// - `RUST_LOG=certid_pki=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize plain stderr logging with a fixed default level
    ///
    /// Intended for containerised deployments where no syslog daemon is
    /// available. `RUST_LOG` still overrides the default when set.
    pub fn init_stderr(default_level: LevelFilter) {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::new()
                .filter_level(default_level)
                .parse_default_env()
                .target(env_logger::Target::Stderr)
                .format_timestamp_secs()
                .init();

            info!("Stderr logging initialized at {default_level}");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Redact an identity value for logging
    ///
    /// Returns `#` followed by the first 12 hex characters of the SHA-256 of
    /// the value, or `<empty>` for the empty string.
    #[must_use]
    pub fn redact(value: &str) -> String {
        if value.is_empty() {
            return "<empty>".to_string();
        }
        let hash = hex::encode(Sha256::digest(value.as_bytes()));
        format!("#{}", &hash[..12])
    }

    /// Log a client identity extracted from proxy headers
    pub fn log_identity(source: &str, common_name: &str, organizational_unit: &str) {
        debug!(
            "Client identity from {source} (cn: {}, ou: {})",
            Self::redact(common_name),
            Self::redact(organizational_unit)
        );
    }

    /// Log a rejected request without exposing the offending values
    pub fn log_rejection(operation: &str, reason: &str) {
        warn!("Rejected {operation}: {reason}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction_is_stable_and_short() {
        LoggingTransformer::init_test();

        let first = LoggingTransformer::redact("service-a");
        let second = LoggingTransformer::redact("service-b");

        assert_ne!(first, second);
        assert_eq!(first, LoggingTransformer::redact("service-a"));
        assert!(first.starts_with('#'));
        assert_eq!(first.len(), 13);
    }

    #[test]
    fn test_redaction_of_empty_value() {
        assert_eq!(LoggingTransformer::redact(""), "<empty>");
    }

    #[test]
    fn test_logging_helpers_do_not_panic() {
        LoggingTransformer::init_test();

        LoggingTransformer::log_identity("Ssl-Client-Subject-Dn", "test1", "a");
        LoggingTransformer::log_rejection("dn extraction", "multiple header values");
    }
}
