//! Environment variable accessors

use crate::error::{CommonError, Result};

/// Read a non-empty environment variable
///
/// # Errors
///
/// Returns `CommonError::MissingEnvironmentVariable` when the variable is
/// unset, empty, or not valid unicode.
pub fn env_value(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(CommonError::MissingEnvironmentVariable(name.to_string())),
    }
}

/// Read an environment variable if it is set and non-empty
#[must_use]
pub fn env_value_opt(name: &str) -> Option<String> {
    env_value(name).ok()
}

/// Read an integer environment variable, falling back to `default`
///
/// Unset variables and values that do not parse as `i64` both yield the
/// default; the latter is logged at `warn`.
#[must_use]
pub fn env_value_or_default_int(name: &str, default: i64) -> i64 {
    let Ok(raw) = env_value(name) else {
        return default;
    };
    match raw.trim().parse::<i64>() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(variable = name, error = %e, "Ignoring non-integer environment value");
            default
        }
    }
}

/// Parse an integer environment variable strictly
///
/// # Errors
///
/// Returns `CommonError::MissingEnvironmentVariable` when unset and
/// `CommonError::InvalidEnvironmentValue` when the value is not an integer.
pub fn env_value_int(name: &str) -> Result<i64> {
    let raw = env_value(name)?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CommonError::InvalidEnvironmentValue {
            name: name.to_string(),
            value: raw,
        })
}
