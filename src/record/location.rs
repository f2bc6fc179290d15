//! Location record: position data associated with an IP address.

use super::Record;
use crate::value::RawRecord;

/// Location data associated with an IP address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    record: Record,
}

impl Location {
    /// Wraps a raw location result.
    pub fn new(raw: RawRecord) -> Self {
        Location {
            record: Record::new(raw),
        }
    }

    /// The approximate accuracy radius, in kilometers, around the latitude
    /// and longitude.
    pub fn accuracy_radius(&self) -> Option<u32> {
        self.record.get_u32("accuracy_radius")
    }

    /// The average income in US dollars associated with the IP address. Only
    /// available from the Insights tier.
    pub fn average_income(&self) -> Option<u32> {
        self.record.get_u32("average_income")
    }

    /// The approximate latitude of the location.
    pub fn latitude(&self) -> Option<f64> {
        self.record.get_f64("latitude")
    }

    /// The approximate longitude of the location.
    pub fn longitude(&self) -> Option<f64> {
        self.record.get_f64("longitude")
    }

    /// The metro code associated with the IP address (US only).
    pub fn metro_code(&self) -> Option<u32> {
        self.record.get_u32("metro_code")
    }

    /// The estimated number of people per square kilometer. Only available
    /// from the Insights tier.
    pub fn population_density(&self) -> Option<u32> {
        self.record.get_u32("population_density")
    }

    /// The IANA time zone name (e.g., `"America/New_York"`).
    pub fn time_zone(&self) -> Option<&str> {
        self.record.get_str("time_zone")
    }
}

impl From<RawRecord> for Location {
    fn from(raw: RawRecord) -> Self {
        Location::new(raw)
    }
}
