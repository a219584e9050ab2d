//! Tests for target normalization.

use super::*;
use proptest::prelude::*;

#[test]
fn test_normalize_ipv4_plain() {
    assert_eq!(
        normalize_ipv4("192.0.2.10").unwrap(),
        Ipv4Addr::new(192, 0, 2, 10)
    );
}

#[test]
fn test_normalize_ipv4_whitespace_and_leading_zeros() {
    assert_eq!(
        normalize_ipv4("  192.000.002.010\n").unwrap(),
        Ipv4Addr::new(192, 0, 2, 10)
    );
    assert_eq!(normalize_ipv4("010.1.1.1").unwrap(), Ipv4Addr::new(10, 1, 1, 1));
}

#[test]
fn test_normalize_ipv4_empty() {
    assert_eq!(normalize_ipv4(""), Err(InputError::EmptyTargetIp));
    assert_eq!(normalize_ipv4("   "), Err(InputError::EmptyTargetIp));
}

#[test]
fn test_normalize_ipv4_rejects_malformed() {
    for input in [
        "192.0.2",
        "192.0.2.10.1",
        "256.0.0.1",
        "192.0.2.-1",
        "192..2.10",
        "0x7f.0.0.1",
        "1234.0.0.1",
        "example.test",
        "::1",
    ] {
        assert!(
            matches!(normalize_ipv4(input), Err(InputError::InvalidTargetIp(_))),
            "{input} should be rejected"
        );
    }
}

#[test]
fn test_normalize_domain() {
    assert_eq!(normalize_domain("Example.TEST.").unwrap(), "example.test");
    assert_eq!(normalize_domain("  sub.example.test ").unwrap(), "sub.example.test");
}

#[test]
fn test_normalize_domain_empty() {
    assert_eq!(normalize_domain(""), Err(InputError::EmptyDomain));
    assert_eq!(normalize_domain("  "), Err(InputError::EmptyDomain));
    assert_eq!(normalize_domain("."), Err(InputError::EmptyDomain));
}

#[test]
fn test_to_fqdn() {
    assert_eq!(to_fqdn("example.test"), "example.test.");
    assert_eq!(to_fqdn("example.test."), "example.test.");
}

proptest! {
    #[test]
    fn test_normalize_ipv4_roundtrips_canonical_form(a: u8, b: u8, c: u8, d: u8) {
        let ip = Ipv4Addr::new(a, b, c, d);
        prop_assert_eq!(normalize_ipv4(&ip.to_string()).unwrap(), ip);
        let padded = format!("{a:03}.{b:03}.{c:03}.{d:03}");
        prop_assert_eq!(normalize_ipv4(&padded).unwrap(), ip);
    }

    #[test]
    fn test_normalize_domain_idempotent(domain in "[a-zA-Z]{1,20}(\\.[a-zA-Z]{2,5}){1,3}\\.?") {
        let once = normalize_domain(&domain).unwrap();
        let twice = normalize_domain(&once).unwrap();
        prop_assert_eq!(once, twice);
    }
}
