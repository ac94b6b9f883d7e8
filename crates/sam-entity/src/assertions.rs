//! `assertions` section: goods and services, disaster relief, and EDI.

use serde::{Deserialize, Serialize};

use crate::de;

/// Assertions made by the entity about what it sells and where it operates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Assertions {
    #[serde(deserialize_with = "de::object")]
    pub goods_and_services: GoodsAndServices,
    #[serde(deserialize_with = "de::object")]
    pub disaster_relief_data: DisasterReliefData,
    #[serde(deserialize_with = "de::object")]
    pub edi_information: EdiInformation,
}

/// NAICS and PSC classifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoodsAndServices {
    #[serde(deserialize_with = "de::nullable")]
    pub primary_naics: String,
    #[serde(deserialize_with = "de::objects")]
    pub naics_list: Vec<Naics>,
    #[serde(deserialize_with = "de::objects")]
    pub psc_list: Vec<Psc>,
}

impl GoodsAndServices {
    /// The `naicsList` entry whose code equals `primaryNaics`, if listed.
    pub fn primary(&self) -> Option<&Naics> {
        if self.primary_naics.is_empty() {
            return None;
        }
        self.naics_list.iter().find(|n| n.naics_code == self.primary_naics)
    }
}

/// One NAICS industry classification entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Naics {
    #[serde(deserialize_with = "de::nullable")]
    pub naics_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub naics_description: String,
    /// `Y`/`N`: whether the entity is small under this code's size standard.
    #[serde(deserialize_with = "de::nullable")]
    pub sba_small_business: String,
    #[serde(deserialize_with = "de::nullable")]
    pub naics_exception: String,
}

/// One product/service code entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Psc {
    #[serde(deserialize_with = "de::nullable")]
    pub psc_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub psc_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisasterReliefData {
    #[serde(deserialize_with = "de::nullable")]
    pub disaster_relief_flag: String,
    #[serde(deserialize_with = "de::nullable")]
    pub bonding_flag: String,
    #[serde(deserialize_with = "de::objects")]
    pub geographical_area_served: Vec<GeographicalAreaServed>,
}

/// A geographic area the entity serves for disaster relief work.
///
/// The metropolitan statistical area keys use a lowercase `m` upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeographicalAreaServed {
    #[serde(deserialize_with = "de::nullable")]
    pub geographical_area_served_state_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub geographical_area_served_state_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub geographical_area_served_county_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub geographical_area_served_county_name: String,
    #[serde(
        rename = "geographicalAreaServedmetropolitanStatisticalAreaCode",
        deserialize_with = "de::nullable"
    )]
    pub geographical_area_served_metropolitan_statistical_area_code: String,
    #[serde(
        rename = "geographicalAreaServedmetropolitanStatisticalAreaName",
        deserialize_with = "de::nullable"
    )]
    pub geographical_area_served_metropolitan_statistical_area_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdiInformation {
    #[serde(deserialize_with = "de::nullable")]
    pub edi_information_flag: String,
}
