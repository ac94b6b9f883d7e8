//! Field deserializers shared by every record in the schema.
//!
//! The SAM Entity API emits `null` for unset values far more often than it
//! omits the key. Both cases must land on the field's zero value, so every
//! field sits inside a `#[serde(default)]` container with one of:
//!
//! - [`nullable`] for strings and numbers,
//! - [`object`] for a nested record,
//! - [`objects`] for a list of records.
//!
//! Derived struct impls also accept JSON arrays (positional fields), and a
//! `#[serde(default)]` container turns `[]` into an all-default value.
//! Records therefore only ever deserialize through [`Object`].

use std::fmt;
use std::marker::PhantomData;

use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Deserialize `T`, mapping JSON `null` to `T::default()`.
///
/// Type mismatches (an object where a string is declared, a string where a
/// list is declared) still fail.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a record from a JSON object, mapping `null` to
/// `T::default()`. Arrays and scalars fail.
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<Object<T>>::deserialize(deserializer)?
        .map(|Object(t)| t)
        .unwrap_or_default())
}

/// Deserialize a list of records. A `null` list is empty and a `null`
/// element is `T::default()`; every other element must be a JSON object.
pub(crate) fn objects<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let list = Option::<Vec<Option<Object<T>>>>::deserialize(deserializer)?;
    Ok(list
        .unwrap_or_default()
        .into_iter()
        .map(|item| item.map(|Object(t)| t).unwrap_or_default())
        .collect())
}

/// Deserializes `T` only from a JSON object.
pub(crate) struct Object<T>(pub T);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Object<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ObjectVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
            type Value = T;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, map: A) -> Result<T, A::Error>
            where
                A: MapAccess<'de>,
            {
                T::deserialize(MapAccessDeserializer::new(map))
            }
        }

        deserializer
            .deserialize_map(ObjectVisitor(PhantomData))
            .map(Object)
    }
}
