//! Postal addresses and the `pointsOfContact` section.
//!
//! A [`PointOfContact`] is an [`Address`] plus name and title fields, encoded
//! as one flat JSON object. The address is embedded with `#[serde(flatten)]`
//! rather than nested under an `address` key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::de;

// -- Address and contact slot -------------------------------------------------

/// Postal address. Empty fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "de::nullable")]
    pub address_line1: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "de::nullable")]
    pub address_line2: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "de::nullable")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "de::nullable")]
    pub state_or_province_code: String,
    /// ISO 3166-1 alpha-3 country code, as SAM reports it.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "de::nullable")]
    pub country_code: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "de::nullable")]
    pub zip_code: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "de::nullable")]
    pub zip_code_plus4: String,
}

impl Address {
    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// One contact slot: address fields plus the person holding the role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PointOfContact {
    #[serde(flatten)]
    pub address: Address,
    #[serde(deserialize_with = "de::nullable")]
    pub first_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub middle_initial: String,
    #[serde(deserialize_with = "de::nullable")]
    pub last_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub title: String,
}

impl PointOfContact {
    /// True when neither the address nor any name field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// First, middle, and last name joined by single spaces, skipping blanks.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_initial, &self.last_name]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// -- Contact roles ------------------------------------------------------------

/// The fixed set of contact roles a SAM entity record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactRole {
    GovernmentBusiness,
    GovernmentBusinessAlternate,
    ElectronicBusiness,
    ElectronicBusinessAlternate,
    PastPerformance,
    PastPerformanceAlternate,
}

impl ContactRole {
    /// All roles, in the order the API declares them.
    pub const ALL: [ContactRole; 6] = [
        Self::GovernmentBusiness,
        Self::GovernmentBusinessAlternate,
        Self::ElectronicBusiness,
        Self::ElectronicBusinessAlternate,
        Self::PastPerformance,
        Self::PastPerformanceAlternate,
    ];

    /// The JSON key holding this role inside `pointsOfContact`.
    pub fn json_key(self) -> &'static str {
        match self {
            Self::GovernmentBusiness => "governmentBusinessPOC",
            Self::GovernmentBusinessAlternate => "governmentBusinessAlternatePOC",
            Self::ElectronicBusiness => "electronicBusinessPOC",
            Self::ElectronicBusinessAlternate => "electronicBusinessAlternatePOC",
            Self::PastPerformance => "pastPerformancePOC",
            Self::PastPerformanceAlternate => "pastPerformanceAlternatePOC",
        }
    }
}

impl fmt::Display for ContactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GovernmentBusiness => write!(f, "government business"),
            Self::GovernmentBusinessAlternate => write!(f, "government business alternate"),
            Self::ElectronicBusiness => write!(f, "electronic business"),
            Self::ElectronicBusinessAlternate => write!(f, "electronic business alternate"),
            Self::PastPerformance => write!(f, "past performance"),
            Self::PastPerformanceAlternate => write!(f, "past performance alternate"),
        }
    }
}

// -- Contact section ----------------------------------------------------------

/// `pointsOfContact` section: one [`PointOfContact`] per [`ContactRole`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsOfContact {
    #[serde(rename = "governmentBusinessPOC", deserialize_with = "de::object")]
    pub government_business: PointOfContact,
    #[serde(rename = "governmentBusinessAlternatePOC", deserialize_with = "de::object")]
    pub government_business_alternate: PointOfContact,
    #[serde(rename = "electronicBusinessPOC", deserialize_with = "de::object")]
    pub electronic_business: PointOfContact,
    #[serde(rename = "electronicBusinessAlternatePOC", deserialize_with = "de::object")]
    pub electronic_business_alternate: PointOfContact,
    #[serde(rename = "pastPerformancePOC", deserialize_with = "de::object")]
    pub past_performance: PointOfContact,
    #[serde(rename = "pastPerformanceAlternatePOC", deserialize_with = "de::object")]
    pub past_performance_alternate: PointOfContact,
}

impl PointsOfContact {
    pub fn get(&self, role: ContactRole) -> &PointOfContact {
        match role {
            ContactRole::GovernmentBusiness => &self.government_business,
            ContactRole::GovernmentBusinessAlternate => &self.government_business_alternate,
            ContactRole::ElectronicBusiness => &self.electronic_business,
            ContactRole::ElectronicBusinessAlternate => &self.electronic_business_alternate,
            ContactRole::PastPerformance => &self.past_performance,
            ContactRole::PastPerformanceAlternate => &self.past_performance_alternate,
        }
    }

    /// Every slot with its role, in declaration order. Empty slots included.
    pub fn iter(&self) -> impl Iterator<Item = (ContactRole, &PointOfContact)> + '_ {
        ContactRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}
