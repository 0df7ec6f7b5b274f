//! IP literal validation

use std::net::Ipv4Addr;

use crate::error::{CommonError, Result};

/// Validate a dotted-quad IPv4 literal such as `192.168.255.255`
///
/// Exactly four decimal octets in `0..=255` are accepted. Hostnames, IPv6
/// literals, CIDR suffixes and surrounding whitespace are rejected.
///
/// # Errors
///
/// Returns `CommonError::InvalidIpv4Address` for anything else.
pub fn valid_ipv4_address(input: &str) -> Result<Ipv4Addr> {
    input
        .parse::<Ipv4Addr>()
        .map_err(|_| CommonError::InvalidIpv4Address(input.to_string()))
}
