//! # sam-entity -- Typed data model for the SAM Entity API
//!
//! Parses responses from `https://api.sam.gov/entity-information/v2/entities`
//! (schema version [`api::VERSION`]) into plain Rust values:
//!
//! - [`ResponseEnvelope`]: `totalRecords` plus the page of [`Entity`] records
//! - [`Registration`]: identifiers, status, and dates (`entityRegistration`)
//! - [`CoreData`]: addresses, structure codes, business types (`coreData`)
//! - [`Assertions`]: NAICS/PSC, disaster relief, EDI (`assertions`)
//! - [`RepsAndCerts`]: FAR/DFARS provision answers and PDF links (`repsAndCerts`)
//! - [`PointsOfContact`]: six fixed contact roles (`pointsOfContact`)
//!
//! ## Parsing rules
//!
//! - JSON keys match the upstream spelling exactly, including its
//!   irregularities (`dFARResponses`, `ueiSAM`, `farPDF`, ...).
//! - Unknown keys are ignored. Missing and `null` values take the field's
//!   zero value (empty string, empty list, default record).
//! - Records must be JSON objects. An array in their place is an error,
//!   never a positional fill.
//! - Every scalar except `totalRecords` is kept as an opaque string. Dates,
//!   flags, and codes are not validated.
//! - Anything that is not structurally valid fails with [`ParseError`], and
//!   no partial value is returned.
//!
//! ## Scope
//!
//! No HTTP client lives here. Build the request URL from [`api::api_url`]
//! or [`EntityApiConfig::endpoint`], add your query parameters and API key,
//! fetch the body with the client of your choice, and hand the bytes to
//! [`parse`].
//!
//! ```
//! let body = br#"{
//!     "totalRecords": 1,
//!     "entityData": [{
//!         "entityRegistration": { "ueiSAM": "C6M7C2FLKER5", "cageCode": null },
//!         "pointsOfContact": {
//!             "governmentBusinessPOC": {
//!                 "firstName": "Jane",
//!                 "lastName": "Doe",
//!                 "city": "Reston"
//!             }
//!         }
//!     }]
//! }"#;
//!
//! let response = sam_entity::parse(body)?;
//! let entity = response.find_by_uei("C6M7C2FLKER5").unwrap();
//! assert_eq!(entity.entity_registration.cage_code, "");
//! assert_eq!(entity.points_of_contact.government_business.full_name(), "Jane Doe");
//! # Ok::<(), sam_entity::ParseError>(())
//! ```

pub mod api;
pub mod assertions;
pub mod config;
pub mod core_data;
pub(crate) mod de;
pub mod error;
pub mod points_of_contact;
pub mod registration;
pub mod reps_and_certs;
pub mod response;

pub use assertions::Assertions;
pub use config::{ConfigError, EntityApiConfig};
pub use core_data::CoreData;
pub use error::{ParseError, ParseErrorKind};
pub use points_of_contact::{Address, ContactRole, PointOfContact, PointsOfContact};
pub use registration::Registration;
pub use reps_and_certs::{Answer, DfarsResponse, FarResponse, RepsAndCerts};
pub use response::{
    parse, parse_entity, parse_reader, parse_str, to_vec, to_vec_pretty, Entity, ResponseEnvelope,
};
