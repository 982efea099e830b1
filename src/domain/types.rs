//! Domain availability records.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Whether a domain name can be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    Available,
    Unavailable,
}

/// Availability of one queried domain name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainInfo {
    #[serde(rename = "domainAvailability")]
    pub availability: Availability,
    #[serde(rename = "domainName")]
    pub domain_name: String,
}

impl DomainInfo {
    pub fn new(domain_name: impl Into<String>, availability: Availability) -> Self {
        Self {
            availability,
            domain_name: domain_name.into(),
        }
    }

    /// Placeholder record used when no API key is configured.
    pub fn placeholder(domain_name: impl Into<String>) -> Self {
        Self::new(domain_name, Availability::Unavailable)
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

/// Body returned by the availability endpoint.
///
/// The live API wraps the record as `{"DomainInfo": {...}}`; the bare
/// record is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum AvailabilityResponse {
    Envelope {
        #[serde(rename = "DomainInfo")]
        domain_info: DomainInfo,
    },
    Bare(DomainInfo),
}

impl AvailabilityResponse {
    pub(crate) fn into_info(self) -> DomainInfo {
        match self {
            Self::Envelope { domain_info } => domain_info,
            Self::Bare(info) => info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bare_record() {
        let body = json!({"domainAvailability": "AVAILABLE", "domainName": "brockbuilds.net"});
        let info = serde_json::from_value::<AvailabilityResponse>(body)
            .unwrap()
            .into_info();
        assert_eq!(info, DomainInfo::new("brockbuilds.net", Availability::Available));
        assert!(info.is_available());
    }

    #[test]
    fn parses_enveloped_record() {
        let body = json!({"DomainInfo": {"domainAvailability": "UNAVAILABLE", "domainName": "google.com"}});
        let info = serde_json::from_value::<AvailabilityResponse>(body)
            .unwrap()
            .into_info();
        assert_eq!(info, DomainInfo::placeholder("google.com"));
    }

    #[test]
    fn unknown_availability_is_rejected() {
        let body = json!({"domainAvailability": "MAYBE", "domainName": "x.com"});
        assert!(serde_json::from_value::<AvailabilityResponse>(body).is_err());
    }

    #[test]
    fn serializes_with_api_field_names() {
        let value = serde_json::to_value(DomainInfo::placeholder("google.com")).unwrap();
        assert_eq!(
            value,
            json!({"domainAvailability": "UNAVAILABLE", "domainName": "google.com"})
        );
        assert_eq!(Availability::Available.to_string(), "AVAILABLE");
        assert_eq!("UNAVAILABLE".parse::<Availability>().unwrap(), Availability::Unavailable);
    }
}
