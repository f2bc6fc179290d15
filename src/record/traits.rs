//! Traits record: network and ownership metadata about the queried address.

use super::network::derive_network;
use super::Record;
use crate::error::RecordError;
use crate::value::{RawRecord, Value};

/// Network/ownership/ISP metadata about the queried IP address.
///
/// Returned by all location services and databases. If the backend supplied
/// `ip_address` and `prefix_length` but no `network`, construction derives
/// the canonical CIDR string before the record is wrapped, so [`network`]
/// always reflects the inputs. Malformed inputs fail construction rather
/// than producing a wrong network value.
///
/// [`network`]: Traits::network
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Traits {
    record: Record,
}

impl Traits {
    /// Wraps a raw traits result, deriving `network` from `ip_address` +
    /// `prefix_length` when the backend did not include it.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MalformedAddress`] when `ip_address` is present
    /// but not a parseable IP literal, and [`RecordError::PrefixOutOfRange`]
    /// when `prefix_length` exceeds the address-family width. A pre-existing
    /// `network` key skips derivation entirely, so neither error can occur
    /// then.
    pub fn new(mut raw: RawRecord) -> Result<Self, RecordError> {
        if !raw.contains_key("network") {
            if let Some(network) = derive_network(&raw)? {
                raw.insert("network".to_string(), Value::String(network));
            }
        }
        Ok(Traits {
            record: Record::new(raw),
        })
    }

    /// The autonomous system number associated with the IP address. Only
    /// available from the City and Insights web services and the Enterprise
    /// database.
    pub fn autonomous_system_number(&self) -> Option<u32> {
        self.record.get_u32("autonomous_system_number")
    }

    /// The organization associated with the registered autonomous system
    /// number. Only available from the City and Insights web services and the
    /// Enterprise database.
    pub fn autonomous_system_organization(&self) -> Option<&str> {
        self.record.get_str("autonomous_system_organization")
    }

    /// The connection type: `"Dialup"`, `"Cable/DSL"`, `"Corporate"`, or
    /// `"Cellular"` today, with additional values possible in the future.
    /// Only available in the Enterprise database.
    pub fn connection_type(&self) -> Option<&str> {
        self.record.get_str("connection_type")
    }

    /// The second-level domain associated with the IP address, e.g.
    /// `"example.com"` or `"example.co.uk"`. Only available from the City and
    /// Insights web services and the Enterprise database.
    pub fn domain(&self) -> Option<&str> {
        self.record.get_str("domain")
    }

    /// The IP address the data in the record is for. Present on every
    /// response that includes a traits record.
    pub fn ip_address(&self) -> Option<&str> {
        self.record.get_str("ip_address")
    }

    /// Whether the IP address belongs to any sort of anonymous network. Only
    /// available from the Insights tier.
    pub fn is_anonymous(&self) -> Option<bool> {
        self.record.get_bool("is_anonymous")
    }

    /// Whether the IP address is registered to an anonymous VPN provider.
    /// Only available from the Insights tier.
    pub fn is_anonymous_vpn(&self) -> Option<bool> {
        self.record.get_bool("is_anonymous_vpn")
    }

    /// Whether the IP address belongs to a hosting or VPN provider. Only
    /// available from the Insights tier.
    pub fn is_hosting_provider(&self) -> Option<bool> {
        self.record.get_bool("is_hosting_provider")
    }

    /// Whether the IP address is believed to be a legitimate proxy, such as
    /// an internal VPN used by a corporation. Only available in the
    /// Enterprise database.
    pub fn is_legitimate_proxy(&self) -> Option<bool> {
        self.record.get_bool("is_legitimate_proxy")
    }

    /// Whether the IP address belongs to a public proxy. Only available from
    /// the Insights tier.
    pub fn is_public_proxy(&self) -> Option<bool> {
        self.record.get_bool("is_public_proxy")
    }

    /// Whether the IP address is a Tor exit node. Only available from the
    /// Insights tier.
    pub fn is_tor_exit_node(&self) -> Option<bool> {
        self.record.get_bool("is_tor_exit_node")
    }

    /// The name of the ISP associated with the IP address. Only available
    /// from the City and Insights web services and the Enterprise database.
    pub fn isp(&self) -> Option<&str> {
        self.record.get_str("isp")
    }

    /// The network in CIDR notation associated with the record: the largest
    /// network where all fields besides `ip_address` have the same value.
    /// Present whenever supplied by the backend or derived at construction.
    pub fn network(&self) -> Option<&str> {
        self.record.get_str("network")
    }

    /// The name of the organization associated with the IP address. Only
    /// available from the City and Insights web services and the Enterprise
    /// database.
    pub fn organization(&self) -> Option<&str> {
        self.record.get_str("organization")
    }

    /// An indicator of how static or dynamic the IP address is, from 0 to
    /// 99.99. Only available from the Insights tier.
    pub fn static_ip_score(&self) -> Option<f64> {
        self.record.get_f64("static_ip_score")
    }

    /// The estimated number of users sharing the IP or network during the
    /// past 24 hours. For IPv4 the count is for the individual IP; for IPv6
    /// it is for the /64 network. Only available from the Insights tier.
    pub fn user_count(&self) -> Option<u32> {
        self.record.get_u32("user_count")
    }

    /// The user type associated with the IP address, e.g. `"residential"`,
    /// `"hosting"`, `"cellular"`, `"search_engine_spider"`. The set of
    /// values grows over time, so the string passes through unvalidated.
    /// Only available from the Insights web service and the Enterprise
    /// database.
    pub fn user_type(&self) -> Option<&str> {
        self.record.get_str("user_type")
    }
}
