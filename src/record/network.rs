//! CIDR network derivation from an address and prefix length.
//!
//! Lookup backends that report `ip_address` and `prefix_length` separately do
//! not always include the canonical `network` string. This module computes it:
//! parse the address, zero the host bits below the prefix, and format the
//! result in CIDR notation using the standard textual form for the family
//! (compressed notation for IPv6).

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::RecordError;
use crate::value::{RawRecord, Value};

/// Derives the CIDR network string from a raw result's `ip_address` and
/// `prefix_length`.
///
/// Returns `Ok(None)` when either input is missing or mistyped — the caller
/// then leaves `network` unset, matching the absent-field contract everywhere
/// else. A present, well-typed pair that cannot produce a valid network is an
/// upstream data fault and fails with [`RecordError`].
pub(crate) fn derive_network(raw: &RawRecord) -> Result<Option<String>, RecordError> {
    let address = raw.get("ip_address").and_then(Value::as_str);
    let prefix_length = raw.get("prefix_length").and_then(Value::as_i64);
    let (Some(address), Some(prefix_length)) = (address, prefix_length) else {
        return Ok(None);
    };

    let ip: IpAddr = address
        .parse()
        .map_err(|source| RecordError::MalformedAddress {
            address: address.to_string(),
            source,
        })?;

    let max_bits: u8 = match ip {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    if prefix_length < 0 || prefix_length > i64::from(max_bits) {
        return Err(RecordError::PrefixOutOfRange {
            address: address.to_string(),
            prefix_length,
            max_bits,
        });
    }

    let prefix = prefix_length as u32;
    let network = format!("{}/{}", mask(ip, prefix), prefix);
    log::debug!("Derived network {} from {}/{}", network, address, prefix);
    Ok(Some(network))
}

/// Zeroes all host bits of `ip` below the first `prefix` bits.
///
/// The shift is guarded so `prefix == 0` yields the all-zero address instead
/// of shifting by the full register width.
fn mask(ip: IpAddr, prefix: u32) -> IpAddr {
    match ip {
        IpAddr::V4(v4) => {
            let mask = if prefix == 0 {
                0
            } else {
                u32::MAX << (32 - prefix)
            };
            IpAddr::V4(Ipv4Addr::from(u32::from(v4) & mask))
        }
        IpAddr::V6(v6) => {
            let mask = if prefix == 0 {
                0
            } else {
                u128::MAX << (128 - prefix)
            };
            IpAddr::V6(Ipv6Addr::from(u128::from(v6) & mask))
        }
    }
}
