//! `entityRegistration` section.
//!
//! Dates and flags are kept as the API sent them. The upstream format is not
//! fixed (dates have appeared as `YYYY-MM-DD` and as full timestamps, flags as
//! `Y`/`N` and as `Yes`/`No`), and re-encoding must reproduce the original.

use serde::{Deserialize, Serialize};

use crate::de;

/// Registration data for a SAM entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Registration {
    #[serde(deserialize_with = "de::nullable")]
    pub sam_registered: String,
    /// Unique Entity Identifier issued by SAM.
    #[serde(rename = "ueiSAM", deserialize_with = "de::nullable")]
    pub uei_sam: String,
    /// Legacy DUNS number, where one was carried over.
    #[serde(rename = "ueiDUNS", deserialize_with = "de::nullable")]
    pub uei_duns: String,
    #[serde(rename = "entityEFTIndicator", deserialize_with = "de::nullable")]
    pub entity_eft_indicator: String,
    /// Commercial and Government Entity code.
    #[serde(deserialize_with = "de::nullable")]
    pub cage_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub dodaac: String,
    #[serde(deserialize_with = "de::nullable")]
    pub legal_business_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub dba_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub purpose_of_registration_code: String,
    #[serde(deserialize_with = "de::nullable")]
    pub purpose_of_registration_desc: String,
    #[serde(deserialize_with = "de::nullable")]
    pub registration_status: String,
    #[serde(deserialize_with = "de::nullable")]
    pub registration_date: String,
    #[serde(deserialize_with = "de::nullable")]
    pub last_update_date: String,
    #[serde(deserialize_with = "de::nullable")]
    pub registration_expiration_date: String,
    #[serde(deserialize_with = "de::nullable")]
    pub activation_date: String,
    #[serde(deserialize_with = "de::nullable")]
    pub uei_status: String,
    #[serde(deserialize_with = "de::nullable")]
    pub uei_expiration_date: String,
    #[serde(deserialize_with = "de::nullable")]
    pub uei_creation_date: String,
    #[serde(deserialize_with = "de::nullable")]
    pub no_public_display_flag: String,
    #[serde(deserialize_with = "de::nullable")]
    pub exclusion_status_flag: String,
    #[serde(rename = "exclusionURL", deserialize_with = "de::nullable")]
    pub exclusion_url: String,
    #[serde(deserialize_with = "de::nullable")]
    pub dnb_open_data: String,
}
