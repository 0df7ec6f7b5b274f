//! Subject DN string parsing

use serde::{Deserialize, Serialize};

use super::config::DuplicateAttributePolicy;

const COMMON_NAME_PREFIX: &str = "CN=";
const ORGANIZATIONAL_UNIT_PREFIX: &str = "OU=";

/// CN and OU of a client certificate subject
///
/// Both fields are lowercase and default to the empty string. An all-empty
/// value means no client certificate was presented. Deserialized values are
/// lowercased as well.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawDnAttributes")]
pub struct DnAttributes {
    common_name: String,
    organizational_unit: String,
}

#[derive(Deserialize)]
struct RawDnAttributes {
    #[serde(default)]
    common_name: String,
    #[serde(default)]
    organizational_unit: String,
}

impl From<RawDnAttributes> for DnAttributes {
    fn from(raw: RawDnAttributes) -> Self {
        Self::new(&raw.common_name, &raw.organizational_unit)
    }
}

impl DnAttributes {
    /// Create attributes, lowercasing both fields
    #[must_use]
    pub fn new(common_name: &str, organizational_unit: &str) -> Self {
        Self {
            common_name: common_name.to_lowercase(),
            organizational_unit: organizational_unit.to_lowercase(),
        }
    }

    /// Lowercased common name (`CN`)
    #[must_use]
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    /// Lowercased organizational unit (`OU`)
    #[must_use]
    pub fn organizational_unit(&self) -> &str {
        &self.organizational_unit
    }

    /// True when neither attribute was found
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.common_name.is_empty() && self.organizational_unit.is_empty()
    }
}

/// Parse a comma-separated subject DN such as `OU=a,CN=Test1`
///
/// Tokens are matched on the exact, case-sensitive prefixes `CN=` and `OU=`
/// with no whitespace trimming; anything else is ignored. When a prefix
/// repeats, the last occurrence wins. Never fails.
#[must_use]
pub fn parse_dn(raw: &str) -> DnAttributes {
    parse_dn_with(raw, DuplicateAttributePolicy::Last)
}

/// Parse a subject DN with an explicit duplicate-attribute policy
#[must_use]
pub fn parse_dn_with(raw: &str, policy: DuplicateAttributePolicy) -> DnAttributes {
    let mut common_name = None;
    let mut organizational_unit = None;

    for token in raw.split(',') {
        if let Some(value) = token.strip_prefix(COMMON_NAME_PREFIX) {
            policy.assign(&mut common_name, value);
        } else if let Some(value) = token.strip_prefix(ORGANIZATIONAL_UNIT_PREFIX) {
            policy.assign(&mut organizational_unit, value);
        }
    }

    DnAttributes::new(
        common_name.unwrap_or_default(),
        organizational_unit.unwrap_or_default(),
    )
}
