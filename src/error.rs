//! Error types for record construction.
//!
//! Missing fields are never errors in this crate: every accessor returns
//! `None` for an absent or mistyped key. The only fatal conditions arise
//! during network derivation in [`Traits::new`](crate::Traits::new), where
//! silently producing a wrong `network` value would be worse than failing.

use std::net::AddrParseError;
use thiserror::Error;

/// Error types for record construction failures.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The raw result's `ip_address` is not a parseable IPv4/IPv6 literal.
    #[error("malformed IP address in lookup result: {address:?}")]
    MalformedAddress {
        /// The offending address string as received from the backend.
        address: String,
        /// The underlying parse failure.
        #[source]
        source: AddrParseError,
    },

    /// The raw result's `prefix_length` is outside the valid range for the
    /// address family (0..=32 for IPv4, 0..=128 for IPv6).
    #[error("prefix length {prefix_length} out of range for {address} (max {max_bits})")]
    PrefixOutOfRange {
        /// The parsed address the prefix was paired with.
        address: String,
        /// The out-of-range prefix length as received.
        prefix_length: i64,
        /// The address-family width the prefix must not exceed.
        max_bits: u8,
    },
}
