//! Extractor configuration

use serde::{Deserialize, Serialize};

use certid_common::env::env_value_opt;

use crate::error::{PkiError, Result};

/// Candidate header names, in priority order
///
/// The first is set by Kubernetes ingress-nginx, the second by a plain nginx
/// reverse proxy.
pub const DEFAULT_HEADER_NAMES: [&str; 2] = ["Ssl-Client-Subject-Dn", "X-Client-Dn"];

const HEADERS_ENV: &str = "CERTID_DN_HEADERS";
const DUPLICATES_ENV: &str = "CERTID_DN_DUPLICATES";

/// Which occurrence of a repeated `CN=`/`OU=` token is kept
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateAttributePolicy {
    /// Later tokens overwrite earlier ones
    #[default]
    Last,
    /// The first token is locked in
    First,
}

impl DuplicateAttributePolicy {
    pub(crate) fn assign<'a>(self, slot: &mut Option<&'a str>, value: &'a str) {
        match self {
            Self::Last => *slot = Some(value),
            Self::First => {
                slot.get_or_insert(value);
            }
        }
    }
}

impl std::str::FromStr for DuplicateAttributePolicy {
    type Err = PkiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" => Ok(Self::Last),
            "first" => Ok(Self::First),
            other => Err(PkiError::InvalidConfiguration(format!(
                "unknown duplicate attribute policy {other:?} (expected \"last\" or \"first\")"
            ))),
        }
    }
}

/// Configuration of the client-DN header extractor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Header names tried in order; the first one present is used
    pub header_names: Vec<String>,
    /// Handling of repeated `CN=`/`OU=` tokens
    pub duplicate_attributes: DuplicateAttributePolicy,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            header_names: DEFAULT_HEADER_NAMES.iter().map(ToString::to_string).collect(),
            duplicate_attributes: DuplicateAttributePolicy::default(),
        }
    }
}

impl ExtractorConfig {
    /// Replace the candidate header list
    #[must_use]
    pub fn with_header_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the duplicate-attribute policy
    #[must_use]
    pub fn with_duplicate_attributes(mut self, policy: DuplicateAttributePolicy) -> Self {
        self.duplicate_attributes = policy;
        self
    }

    /// Build the default configuration overlaid with environment overrides
    ///
    /// - `CERTID_DN_HEADERS`: comma-separated header names in priority order
    /// - `CERTID_DN_DUPLICATES`: `last` or `first`
    ///
    /// # Errors
    ///
    /// Returns `PkiError::InvalidConfiguration` when the resulting
    /// configuration fails [`ExtractorConfig::validate`] or the policy value is
    /// unknown.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = env_value_opt(HEADERS_ENV) {
            config.header_names = raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(raw) = env_value_opt(DUPLICATES_ENV) {
            config.duplicate_attributes = raw.parse()?;
        }

        config.validate()?;
        tracing::debug!(
            headers = ?config.header_names,
            duplicates = ?config.duplicate_attributes,
            "Loaded DN extractor configuration"
        );
        Ok(config)
    }

    /// Check that at least one non-empty header name is configured
    ///
    /// # Errors
    ///
    /// Returns `PkiError::InvalidConfiguration` otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.header_names.is_empty() {
            return Err(PkiError::InvalidConfiguration(
                "no client DN header names configured".to_string(),
            ));
        }
        if self.header_names.iter().any(|name| name.trim().is_empty()) {
            return Err(PkiError::InvalidConfiguration(
                "client DN header names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
