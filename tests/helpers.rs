// Shared test helpers for building raw lookup results.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use geoip_records::{RawRecord, Value};

/// Parses a JSON literal into a raw lookup result.
#[allow(dead_code)] // Used by other test files
pub fn raw_from_json(json: &str) -> RawRecord {
    serde_json::from_str(json).expect("Failed to deserialize test fixture")
}

/// Builds a raw lookup result from key-value pairs.
#[allow(dead_code)] // Used by other test files
pub fn raw_from_pairs(entries: &[(&str, Value)]) -> RawRecord {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// Initializes logging for tests that want to inspect derivation debug output.
/// Safe to call from multiple tests; only the first call installs the logger.
#[allow(dead_code)] // Used by other test files
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
