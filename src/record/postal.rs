//! Postal record: postal code data associated with an IP address.

use super::Record;
use crate::value::RawRecord;

/// Postal data associated with an IP address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postal {
    record: Record,
}

impl Postal {
    /// Wraps a raw postal result.
    pub fn new(raw: RawRecord) -> Self {
        Postal {
            record: Record::new(raw),
        }
    }

    /// The postal code associated with the IP address. Not guaranteed to be
    /// numeric in all countries.
    pub fn code(&self) -> Option<&str> {
        self.record.get_str("code")
    }

    /// A 0-100 score of confidence that the postal code is correct. Only
    /// available from the Insights tier.
    pub fn confidence(&self) -> Option<u32> {
        self.record.get_u32("confidence")
    }
}

impl From<RawRecord> for Postal {
    fn from(raw: RawRecord) -> Self {
        Postal::new(raw)
    }
}
