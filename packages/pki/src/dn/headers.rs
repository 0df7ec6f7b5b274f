//! Client-DN header selection

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use certid_common::LoggingTransformer;
use tracing::debug;

use super::config::ExtractorConfig;
use super::parser::{parse_dn_with, DnAttributes};
use crate::error::{PkiError, Result};

/// Ordered header mapping as handed over by the HTTP layer
pub type HeaderMap = BTreeMap<String, Vec<String>>;

/// Read access to request headers
///
/// Lookups are exact: header names are matched case-sensitively as received.
pub trait HeaderSource {
    /// Every value received for `name`, or `None` when the header is absent
    fn header_values(&self, name: &str) -> Option<&[String]>;
}

impl HeaderSource for BTreeMap<String, Vec<String>> {
    fn header_values(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}

impl<S: BuildHasher> HeaderSource for HashMap<String, Vec<String>, S> {
    fn header_values(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}

/// Extracts client DN attributes from proxy-injected headers
#[derive(Clone, Debug, Default)]
pub struct DnExtractor {
    config: ExtractorConfig,
}

impl DnExtractor {
    /// Create an extractor with the given configuration
    #[must_use]
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract CN/OU from the first configured header present in `headers`
    ///
    /// Only that header is consulted, even if it yields empty attributes.
    /// When none of the configured headers is present, the anonymous (empty)
    /// attributes are returned.
    ///
    /// # Errors
    ///
    /// Returns `PkiError::MultipleHeaderValues` when the selected header does
    /// not carry exactly one value. Picking one of several values would let a
    /// client smuggle in an identity next to the proxy's.
    pub fn extract<H: HeaderSource + ?Sized>(&self, headers: &H) -> Result<DnAttributes> {
        let Some((name, values)) = self
            .config
            .header_names
            .iter()
            .find_map(|name| headers.header_values(name).map(|values| (name, values)))
        else {
            debug!("No client DN header present, treating request as anonymous");
            return Ok(DnAttributes::default());
        };

        let [value] = values else {
            LoggingTransformer::log_rejection(
                "client DN extraction",
                &format!("header {name} carries {} values, expected exactly one", values.len()),
            );
            return Err(PkiError::MultipleHeaderValues(name.clone()));
        };

        let attributes = parse_dn_with(value, self.config.duplicate_attributes);
        LoggingTransformer::log_identity(
            name,
            attributes.common_name(),
            attributes.organizational_unit(),
        );
        Ok(attributes)
    }
}

/// Extract CN/OU using the default header names and policy
///
/// Tries `Ssl-Client-Subject-Dn`, then `X-Client-Dn`.
///
/// # Errors
///
/// Returns `PkiError::MultipleHeaderValues` when the selected header does not
/// carry exactly one value.
pub fn extract_dn<H: HeaderSource + ?Sized>(headers: &H) -> Result<DnAttributes> {
    DnExtractor::default().extract(headers)
}
