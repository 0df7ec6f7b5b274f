//! IPv4 literal validation

use std::net::Ipv4Addr;

use certid_common::net::valid_ipv4_address;

#[test]
fn test_valid_addresses() {
    for input in ["0.0.0.0", "192.168.255.255", "255.255.255.255", "1.1.1.255"] {
        assert!(
            valid_ipv4_address(input).is_ok(),
            "valid IP address not detected as such: {input}"
        );
    }
    assert_eq!(
        valid_ipv4_address("10.0.0.1"),
        Ok(Ipv4Addr::new(10, 0, 0, 1))
    );
}

#[test]
fn test_invalid_addresses() {
    for input in [
        "",
        "1.1.1",
        "1.1.1.1.1",
        "256.1.1.1",
        "1.1.1.-1",
        "a.b.c.d",
        " 1.1.1.1",
        "10.0.0.0/8",
        "::1",
    ] {
        assert!(
            valid_ipv4_address(input).is_err(),
            "invalid IP address accepted: {input:?}"
        );
    }
}
