//! geoip-records: typed records over raw GeoIP lookup results.
//!
//! This library is the record/data-model layer of a geolocation lookup
//! client. An upstream collaborator — an HTTP client for a lookup web
//! service, or a local database reader — produces a loosely-typed nested
//! key-value result; this crate wraps it in read-only record types with
//! named, documented accessors. Missing or mistyped fields are never errors:
//! every accessor returns `Option`, since field availability varies across
//! database editions and service tiers.
//!
//! The one non-trivial computation is in [`Traits`]: when the backend
//! supplies `ip_address` and `prefix_length` but no `network`, construction
//! derives the canonical CIDR string by masking the host bits.
//!
//! # Example
//!
//! ```
//! use geoip_records::{RawRecord, Traits};
//!
//! let raw: RawRecord = serde_json::from_str(
//!     r#"{"ip_address": "1.2.3.4", "prefix_length": 24, "isp": "Example ISP"}"#,
//! )?;
//!
//! let traits = Traits::new(raw)?;
//! assert_eq!(traits.network(), Some("1.2.3.0/24"));
//! assert_eq!(traits.isp(), Some("Example ISP"));
//! assert_eq!(traits.domain(), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Concurrency
//!
//! Records own their backing map and never mutate after construction, so
//! they can be shared across threads by reference without synchronization.

#![warn(missing_docs)]

mod error;
pub mod record;
mod value;

// Re-export public API
pub use error::RecordError;
pub use record::{
    Continent, Country, GeographicFields, Location, Postal, Record, RepresentedCountry, Traits,
};
pub use value::{RawRecord, Value};
