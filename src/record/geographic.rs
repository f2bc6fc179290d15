//! Geographic entity records: country family and continent.
//!
//! The country-level types share one field surface (confidence, ISO code,
//! localized names, GeoNames identifier), so they embed a common
//! `GeographicFields` capability rather than forming a type hierarchy.

use super::Record;
use crate::value::RawRecord;

/// Shared geographic fields embedded by the country family and `Continent`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeographicFields {
    record: Record,
}

impl GeographicFields {
    /// Wraps a raw geographic entity result.
    pub fn new(raw: RawRecord) -> Self {
        GeographicFields {
            record: Record::new(raw),
        }
    }

    /// A 0-100 score of confidence that the entity is correct. Only available
    /// from the Insights tier.
    pub fn confidence(&self) -> Option<u32> {
        self.record.get_u32("confidence")
    }

    /// The GeoNames identifier for the entity.
    pub fn geoname_id(&self) -> Option<u32> {
        self.record.get_u32("geoname_id")
    }

    /// The ISO code for the entity (ISO 3166-1 alpha-2 for countries).
    pub fn iso_code(&self) -> Option<&str> {
        self.record.get_str("iso_code")
    }

    /// The map from locale code to localized entity name, as supplied by the
    /// backend. No localization happens here.
    pub fn names(&self) -> Option<&RawRecord> {
        self.record.get_map("names")
    }

    /// The entity name in the given locale (e.g., `"en"`, `"pt-BR"`), or
    /// `None` if the backend supplied no name for it.
    pub fn name(&self, locale: &str) -> Option<&str> {
        self.names()?.get(locale)?.as_str()
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

/// Country-level data associated with an IP address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Country {
    geo: GeographicFields,
}

impl Country {
    /// Wraps a raw country result.
    pub fn new(raw: RawRecord) -> Self {
        Country {
            geo: GeographicFields::new(raw),
        }
    }

    /// The shared geographic fields (confidence, ISO code, names, GeoNames
    /// identifier).
    pub fn geographic(&self) -> &GeographicFields {
        &self.geo
    }

    /// Whether the country is a member state of the European Union.
    pub fn is_in_european_union(&self) -> Option<bool> {
        self.geo.record().get_bool("is_in_european_union")
    }
}

impl From<RawRecord> for Country {
    fn from(raw: RawRecord) -> Self {
        Country::new(raw)
    }
}

/// Country-level data for the country represented by something like a
/// military base at the queried address, as opposed to the country the
/// address is physically in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepresentedCountry {
    geo: GeographicFields,
}

impl RepresentedCountry {
    /// Wraps a raw represented-country result.
    pub fn new(raw: RawRecord) -> Self {
        RepresentedCountry {
            geo: GeographicFields::new(raw),
        }
    }

    /// The shared geographic fields.
    pub fn geographic(&self) -> &GeographicFields {
        &self.geo
    }

    /// Whether the represented country is an EU member state.
    pub fn is_in_european_union(&self) -> Option<bool> {
        self.geo.record().get_bool("is_in_european_union")
    }

    /// The type of entity representing the country, from the wire key `type`.
    /// Currently only `"military"` is returned, but new values may appear
    /// without a client update, so the string passes through unvalidated.
    pub fn entity_type(&self) -> Option<&str> {
        self.geo.record().get_str("type")
    }
}

impl From<RawRecord> for RepresentedCountry {
    fn from(raw: RawRecord) -> Self {
        RepresentedCountry::new(raw)
    }
}

/// Continent-level data associated with an IP address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Continent {
    geo: GeographicFields,
}

impl Continent {
    /// Wraps a raw continent result.
    pub fn new(raw: RawRecord) -> Self {
        Continent {
            geo: GeographicFields::new(raw),
        }
    }

    /// The shared geographic fields (names, GeoNames identifier).
    pub fn geographic(&self) -> &GeographicFields {
        &self.geo
    }

    /// The two-character continent code (e.g., `"NA"`, `"EU"`).
    pub fn code(&self) -> Option<&str> {
        self.geo.record().get_str("code")
    }
}

impl From<RawRecord> for Continent {
    fn from(raw: RawRecord) -> Self {
        Continent::new(raw)
    }
}
