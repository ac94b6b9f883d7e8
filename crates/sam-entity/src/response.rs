//! Response envelope, the `Entity` aggregate, and the parse/encode entry
//! points.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::assertions::Assertions;
use crate::core_data::CoreData;
use crate::de::{self, Object};
use crate::error::ParseError;
use crate::points_of_contact::PointsOfContact;
use crate::registration::Registration;
use crate::reps_and_certs::RepsAndCerts;

/// One page of SAM Entity API results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Total matches for the query, across all pages. Not range-checked.
    #[serde(deserialize_with = "de::nullable")]
    pub total_records: i64,
    /// Entities on this page, in response order.
    #[serde(deserialize_with = "de::objects")]
    pub entity_data: Vec<Entity>,
}

impl ResponseEnvelope {
    /// True when this page holds every matching record. Always false for a
    /// negative `totalRecords`.
    pub fn is_complete(&self) -> bool {
        i64::try_from(self.entity_data.len()).is_ok_and(|n| n == self.total_records)
    }

    /// The entity whose SAM UEI is `uei`.
    pub fn find_by_uei(&self, uei: &str) -> Option<&Entity> {
        self.entity_data.iter().find(|e| e.uei() == uei)
    }

    pub fn len(&self) -> usize {
        self.entity_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entity_data.iter()
    }
}

impl IntoIterator for ResponseEnvelope {
    type Item = Entity;
    type IntoIter = std::vec::IntoIter<Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entity_data.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResponseEnvelope {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entity_data.iter()
    }
}

/// A registered organization's full record. The five sections are
/// independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entity {
    #[serde(deserialize_with = "de::object")]
    pub entity_registration: Registration,
    #[serde(deserialize_with = "de::object")]
    pub core_data: CoreData,
    #[serde(deserialize_with = "de::object")]
    pub assertions: Assertions,
    #[serde(deserialize_with = "de::object")]
    pub reps_and_certs: RepsAndCerts,
    #[serde(deserialize_with = "de::object")]
    pub points_of_contact: PointsOfContact,
}

impl Entity {
    /// SAM Unique Entity Identifier (`ueiSAM`). Empty if the API omitted it.
    pub fn uei(&self) -> &str {
        &self.entity_registration.uei_sam
    }

    pub fn legal_business_name(&self) -> &str {
        &self.entity_registration.legal_business_name
    }
}

/// Parse a SAM Entity API response body.
///
/// Unknown keys are ignored. Missing or `null` fields take their zero value.
/// Values are not validated beyond their JSON type.
///
/// # Errors
///
/// Returns [`ParseError`] if `bytes` is not well-formed JSON, is not a JSON
/// object, holds a value of the wrong type at a declared field (including an
/// array where a record is declared), or repeats a key within one object.
pub fn parse(bytes: &[u8]) -> Result<ResponseEnvelope, ParseError> {
    finish(serde_json::from_slice::<Object<ResponseEnvelope>>(bytes))
}

/// [`parse`] over a string slice.
pub fn parse_str(s: &str) -> Result<ResponseEnvelope, ParseError> {
    parse(s.as_bytes())
}

/// [`parse`] over a reader. The reader is buffered internally.
///
/// # Errors
///
/// As [`parse`], plus [`crate::ParseErrorKind::Io`] when the reader fails.
pub fn parse_reader<R: Read>(reader: R) -> Result<ResponseEnvelope, ParseError> {
    let reader = std::io::BufReader::new(reader);
    finish(serde_json::from_reader::<_, Object<ResponseEnvelope>>(reader))
}

/// Parse a single `Entity` object, as found in one element of `entityData`.
pub fn parse_entity(bytes: &[u8]) -> Result<Entity, ParseError> {
    match serde_json::from_slice::<Object<Entity>>(bytes) {
        Ok(Object(entity)) => {
            tracing::debug!(uei = entity.uei(), "parsed SAM entity record");
            Ok(entity)
        }
        Err(e) => Err(reject(e)),
    }
}

/// Encode a response back to compact JSON.
///
/// Re-parsing the output yields a value equal to `response`.
pub fn to_vec(response: &ResponseEnvelope) -> Result<Vec<u8>, ParseError> {
    Ok(serde_json::to_vec(response)?)
}

/// Encode a response back to indented JSON.
pub fn to_vec_pretty(response: &ResponseEnvelope) -> Result<Vec<u8>, ParseError> {
    Ok(serde_json::to_vec_pretty(response)?)
}

fn finish(
    result: Result<Object<ResponseEnvelope>, serde_json::Error>,
) -> Result<ResponseEnvelope, ParseError> {
    let Object(response) = result.map_err(reject)?;
    tracing::debug!(
        total_records = response.total_records,
        entities = response.entity_data.len(),
        "parsed SAM entity response"
    );
    if !response.is_complete() {
        tracing::trace!(
            total_records = response.total_records,
            entities = response.entity_data.len(),
            "response holds a partial page"
        );
    }
    Ok(response)
}

fn reject(e: serde_json::Error) -> ParseError {
    let err = ParseError::from(e);
    tracing::debug!(
        kind = %err.kind(),
        line = err.line(),
        column = err.column(),
        "failed to parse SAM entity response"
    );
    err
}
