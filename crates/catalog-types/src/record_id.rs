//! Canonical record identifiers.
//!
//! Catalog documents are hand-edited, so the same photo may be referred to as `1` in one
//! place and `"1"` in another. [`RecordId`] folds those spellings onto a single comparison
//! key while remembering how the value was stored, so rewriting a document never changes
//! an id from a number into a string.

use crate::TypesError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// How the identifier appeared in its source document.
#[derive(Clone, Debug)]
enum Stored {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

/// Identifier for a photo or an album.
///
/// Equality and hashing use the normalised key only:
/// - surrounding whitespace is ignored,
/// - integer text is keyed by its integer value (`"007"` equals `7`),
/// - integral floats are keyed as integers (`1.0` equals `1`),
/// - anything else is compared verbatim.
#[derive(Clone, Debug)]
pub struct RecordId {
    key: String,
    stored: Stored,
}

impl RecordId {
    /// Parses an identifier typed by a user.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::EmptyId`] if `input` is empty or whitespace only.
    pub fn parse(input: &str) -> Result<Self, TypesError> {
        if input.trim().is_empty() {
            return Err(TypesError::EmptyId);
        }
        Ok(Self::from_stored(Stored::Text(input.to_owned())))
    }

    fn from_stored(stored: Stored) -> Self {
        let key = match &stored {
            Stored::Signed(value) => value.to_string(),
            Stored::Unsigned(value) => value.to_string(),
            Stored::Float(value) => integral_key(*value).unwrap_or_else(|| value.to_string()),
            Stored::Text(text) => text_key(text),
        };
        Self { key, stored }
    }
}

fn integral_key(value: f64) -> Option<String> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some((value as i64).to_string())
    } else {
        None
    }
}

fn text_key(text: &str) -> String {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return value.to_string();
    }
    if let Some(key) = trimmed.parse::<f64>().ok().and_then(integral_key) {
        return key;
    }
    trimmed.to_owned()
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.stored {
            Stored::Text(text) => write!(f, "{}", text.trim()),
            _ => write!(f, "{}", self.key),
        }
    }
}

impl FromStr for RecordId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::from_stored(Stored::Signed(value))
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.stored {
            Stored::Signed(value) => serializer.serialize_i64(*value),
            Stored::Unsigned(value) => serializer.serialize_u64(*value),
            Stored::Float(value) => serializer.serialize_f64(*value),
            Stored::Text(text) => serializer.serialize_str(text),
        }
    }
}

struct RecordIdVisitor;

impl Visitor<'_> for RecordIdVisitor {
    type Value = RecordId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a string identifier")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RecordId, E> {
        Ok(RecordId::from_stored(Stored::Signed(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RecordId, E> {
        // Keep small unsigned values in the signed form so they serialise identically.
        match i64::try_from(value) {
            Ok(signed) => Ok(RecordId::from_stored(Stored::Signed(signed))),
            Err(_) => Ok(RecordId::from_stored(Stored::Unsigned(value))),
        }
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<RecordId, E> {
        Ok(RecordId::from_stored(Stored::Float(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RecordId, E> {
        Ok(RecordId::from_stored(Stored::Text(value.to_owned())))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<RecordId, E> {
        Ok(RecordId::from_stored(Stored::Text(value)))
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RecordIdVisitor)
    }
}
