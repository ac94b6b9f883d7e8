//! `coreData` section: identification, addresses, structure codes, business
//! types, and financial flags.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::points_of_contact::Address;

/// Core business data for a SAM entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreData {
    #[serde(deserialize_with = "de::object")]
    pub entity_information: EntityInformation,
    #[serde(deserialize_with = "de::object")]
    pub physical_address: Address,
    #[serde(deserialize_with = "de::object")]
    pub mailing_address: Address,
    #[serde(deserialize_with = "de::nullable")]
    pub congressional_district: String,
    #[serde(deserialize_with = "de::object")]
    pub general_information: GeneralInformation,
    #[serde(deserialize_with = "de::object")]
    pub business_types: BusinessTypes,
    #[serde(deserialize_with = "de::object")]
    pub financial_information: FinancialInformation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntityInformation {
    #[serde(rename = "entityURL", deserialize_with = "de::nullable")]
    pub entity_url: String,
    #[serde(deserialize_with = "de::nullable")]
    pub entity_division_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub entity_division_number: String,
    #[serde(deserialize_with = "de::nullable")]
    pub entity_start_date: String,
    /// Month and day only, e.g. `12/31`.
    #[serde(deserialize_with = "de::nullable")]
    pub fiscal_year_end_close_date: String,
    #[serde(deserialize_with = "de::nullable")]
    pub submission_date: String,
}

/// Structure and classification codes, each paired with its description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralInformation {
    #[serde(deserialize_with = "de::nullable")]
    pub entity_structure_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub entity_structure_desc: String,
    #[serde(deserialize_with = "de::nullable")]
    pub entity_type_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub entity_type_desc: String,
    #[serde(deserialize_with = "de::nullable")]
    pub profit_structure_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub profit_structure_desc: String,
    #[serde(deserialize_with = "de::nullable")]
    pub organization_structure_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub organization_structure_desc: String,
    #[serde(deserialize_with = "de::nullable")]
    pub state_of_incorporation_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub state_of_incorporation_desc: String,
    #[serde(deserialize_with = "de::nullable")]
    pub country_of_incorporation_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub country_of_incorporation_desc: String,
}

/// General and SBA-specific business type classifications.
///
/// The two lists are keyed independently upstream; an SBA certification does
/// not imply a matching general business type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessTypes {
    #[serde(deserialize_with = "de::objects")]
    pub business_type_list: Vec<BusinessType>,
    #[serde(deserialize_with = "de::objects")]
    pub sba_business_type_list: Vec<SbaBusinessType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessType {
    #[serde(deserialize_with = "de::nullable")]
    pub business_type_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub business_type_desc: String,
}

/// SBA certification with its entry and exit dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SbaBusinessType {
    #[serde(deserialize_with = "de::nullable")]
    pub sba_business_type_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub sba_business_type_desc: String,
    #[serde(deserialize_with = "de::nullable")]
    pub certification_entry_date: String,
    #[serde(deserialize_with = "de::nullable")]
    pub certification_exit_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialInformation {
    #[serde(deserialize_with = "de::nullable")]
    pub credit_card_usage: String,
    #[serde(deserialize_with = "de::nullable")]
    pub debt_subject_to_offset: String,
}
