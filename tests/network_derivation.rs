//! Integration tests for construction-time CIDR network derivation.

mod helpers;

use geoip_records::{RecordError, Traits, Value};
use helpers::{init_test_logging, raw_from_pairs};

fn traits(entries: &[(&str, Value)]) -> Traits {
    Traits::new(raw_from_pairs(entries)).expect("Failed to construct traits record")
}

#[test]
fn derives_network_from_address_and_prefix() {
    init_test_logging();
    let traits = traits(&[
        ("ip_address", Value::from("1.2.3.0")),
        ("prefix_length", Value::from(24_i64)),
    ]);
    assert_eq!(traits.network(), Some("1.2.3.0/24"));
}

#[test]
fn derivation_masks_host_bits() {
    let traits = traits(&[
        ("ip_address", Value::from("1.2.3.4")),
        ("prefix_length", Value::from(24_i64)),
    ]);
    assert_eq!(
        traits.network(),
        Some("1.2.3.0/24"),
        "host bits must be zeroed, not passed through"
    );
}

#[test]
fn derivation_formats_ipv6_compressed() {
    let traits = traits(&[
        ("ip_address", Value::from("2001:db8::1")),
        ("prefix_length", Value::from(32_i64)),
    ]);
    assert_eq!(traits.network(), Some("2001:db8::/32"));
}

#[test]
fn supplied_network_is_returned_unchanged() {
    let traits = traits(&[
        ("ip_address", Value::from("1.2.3.4")),
        ("prefix_length", Value::from(24_i64)),
        ("network", Value::from("198.51.100.0/22")),
    ]);
    assert_eq!(traits.network(), Some("198.51.100.0/22"));
}

#[test]
fn incomplete_inputs_yield_absent_network() {
    let only_address = traits(&[("ip_address", Value::from("1.2.3.4"))]);
    assert_eq!(only_address.network(), None);

    let only_prefix = traits(&[("prefix_length", Value::from(24_i64))]);
    assert_eq!(only_prefix.network(), None);

    let neither = traits(&[("isp", Value::from("Example ISP"))]);
    assert_eq!(neither.network(), None);
}

#[test]
fn mistyped_inputs_yield_absent_network() {
    let traits = traits(&[
        ("ip_address", Value::from(1234_i64)),
        ("prefix_length", Value::from("24")),
    ]);
    assert_eq!(traits.network(), None);
}

#[test]
fn malformed_address_fails_construction() {
    let err = Traits::new(raw_from_pairs(&[
        ("ip_address", Value::from("not-an-ip")),
        ("prefix_length", Value::from(24_i64)),
    ]))
    .expect_err("malformed address should fail construction");

    match err {
        RecordError::MalformedAddress { address, .. } => assert_eq!(address, "not-an-ip"),
        other => panic!("expected MalformedAddress, got {:?}", other),
    }
}

#[test]
fn boundary_prefix_zero() {
    let v4 = traits(&[
        ("ip_address", Value::from("203.0.113.9")),
        ("prefix_length", Value::from(0_i64)),
    ]);
    assert_eq!(v4.network(), Some("0.0.0.0/0"));

    let v6 = traits(&[
        ("ip_address", Value::from("2001:db8::1")),
        ("prefix_length", Value::from(0_i64)),
    ]);
    assert_eq!(v6.network(), Some("::/0"));
}

#[test]
fn boundary_prefix_full_width() {
    let v4 = traits(&[
        ("ip_address", Value::from("203.0.113.9")),
        ("prefix_length", Value::from(32_i64)),
    ]);
    assert_eq!(v4.network(), Some("203.0.113.9/32"));

    let v6 = traits(&[
        ("ip_address", Value::from("2001:db8::1")),
        ("prefix_length", Value::from(128_i64)),
    ]);
    assert_eq!(v6.network(), Some("2001:db8::1/128"));
}

#[test]
fn out_of_range_prefix_fails_construction() {
    for (address, prefix_length) in [("1.2.3.4", 33_i64), ("2001:db8::1", 129), ("1.2.3.4", -1)] {
        let err = Traits::new(raw_from_pairs(&[
            ("ip_address", Value::from(address)),
            ("prefix_length", Value::from(prefix_length)),
        ]))
        .expect_err("out-of-range prefix should fail construction");
        assert!(
            matches!(err, RecordError::PrefixOutOfRange { .. }),
            "expected PrefixOutOfRange for {}/{}, got {:?}",
            address,
            prefix_length,
            err
        );
    }
}

#[test]
fn ipv4_mapped_ipv6_uses_v6_width() {
    // "::ffff:1.2.3.4" parses as IPv6, so prefixes up to 128 are valid
    let traits = traits(&[
        ("ip_address", Value::from("::ffff:1.2.3.4")),
        ("prefix_length", Value::from(112_i64)),
    ]);
    assert_eq!(traits.network(), Some("::ffff:1.2.0.0/112"));
}
