//! Typed record wrappers over raw lookup results.
//!
//! Each record type wraps one [`RawRecord`] and exposes named, documented
//! accessors for the fields a lookup backend may populate. Records are
//! immutable after construction and own their backing map outright, so they
//! can be shared freely across threads.
//!
//! Record types:
//! - `Country` / `RepresentedCountry` / `Continent`: geographic entities
//! - `Location` / `Postal`: position and postal data
//! - `Traits`: network/ownership metadata, with construction-time CIDR
//!   derivation when the backend supplies `ip_address` + `prefix_length`

mod geographic;
mod location;
mod network;
mod postal;
mod traits;

pub use geographic::{Continent, Country, GeographicFields, RepresentedCountry};
pub use location::Location;
pub use postal::Postal;
pub use traits::Traits;

use crate::value::{RawRecord, Value};

/// Read-only wrapper over one raw lookup result.
///
/// `get` is the single primitive every named accessor is built on: it returns
/// the value at a key or `None`, never panicking for missing keys. The typed
/// getters additionally return `None` when the stored value has an unexpected
/// type, since field shapes vary across database editions and service tiers
/// (an ISP field, for instance, is only populated by some data products).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    raw: RawRecord,
}

impl Record {
    /// Wraps a raw result. The map is moved in, giving the record sole
    /// ownership; nothing can mutate it afterward.
    pub fn new(raw: RawRecord) -> Self {
        Record { raw }
    }

    /// Returns the value stored at `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Returns the string at `key`, or `None` if absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns the integer at `key`, or `None` if absent or not an integer.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Returns the integer at `key` as `u32`, or `None` if absent, not an
    /// integer, or out of range.
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(Value::as_u32)
    }

    /// Returns the number at `key` as `f64`, or `None` if absent or not
    /// numeric.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Returns the boolean at `key`, or `None` if absent or not a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Returns the nested map at `key`, or `None` if absent or not a map.
    pub fn get_map(&self, key: &str) -> Option<&RawRecord> {
        self.get(key).and_then(Value::as_map)
    }
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Record::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        let mut raw = RawRecord::new();
        raw.insert("isp".to_string(), Value::from("Example ISP"));
        raw.insert("user_count".to_string(), Value::from(3_i64));
        raw.insert("score".to_string(), Value::from(0.25));
        raw.insert("is_anonymous".to_string(), Value::from(false));
        Record::new(raw)
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let record = sample_record();
        assert!(record.get("no_such_key").is_none());
        assert!(record.get_str("no_such_key").is_none());
        assert!(record.get_i64("no_such_key").is_none());
        assert!(record.get_bool("no_such_key").is_none());
    }

    #[test]
    fn test_typed_getters_match() {
        let record = sample_record();
        assert_eq!(record.get_str("isp"), Some("Example ISP"));
        assert_eq!(record.get_u32("user_count"), Some(3));
        assert_eq!(record.get_f64("score"), Some(0.25));
        assert_eq!(record.get_bool("is_anonymous"), Some(false));
    }

    #[test]
    fn test_typed_getters_reject_wrong_type() {
        let record = sample_record();
        // Present but mistyped behaves like absent
        assert_eq!(record.get_i64("isp"), None);
        assert_eq!(record.get_str("user_count"), None);
        assert!(record.get_map("score").is_none());
    }

    #[test]
    fn test_empty_record_is_valid() {
        let record = Record::new(RawRecord::new());
        assert!(record.get("anything").is_none());
    }
}
