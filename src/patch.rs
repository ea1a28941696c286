//! Tri-state request fields for partial updates.
//!
//! JSON distinguishes a field that is absent from one that is explicitly
//! `null`; update semantics depend on that difference (omission leaves a
//! field alone, `null` may clear it). Use with `#[serde(default)]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Field not present in the request
    #[default]
    Missing,
    /// Field present with an explicit `null`
    Null,
    /// Field present with a value
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    /// Value if present, treating `null` like absence
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Value(value) => Some(value),
            Patch::Missing | Patch::Null => None,
        }
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Missing => Patch::Missing,
            Patch::Null => Patch::Null,
            Patch::Value(value) => Patch::Value(value),
        }
    }
}

impl Patch<Json> {
    /// Narrow a loosely-typed field to text
    ///
    /// Request bodies keep string fields as raw JSON so a wrongly typed value
    /// reaches field validation instead of failing the whole body. A value of
    /// any other JSON type becomes `invalid`.
    pub fn text<E>(&self, invalid: E) -> Result<Option<&str>, E> {
        match self {
            Patch::Missing | Patch::Null => Ok(None),
            Patch::Value(Json::String(value)) => Ok(Some(value)),
            Patch::Value(_) => Err(invalid),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; absence comes from `default`.
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}
