//! Catalog records.
//!
//! [`Photo`] and [`Album`] mirror the entries of `photos.json` and `albums.json`.
//! [`FormattedPhoto`] is the display projection handed back to callers and is never
//! written to disk.

use catalog_types::{EditText, RecordId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A free-text photo field kept exactly as it was stored.
///
/// Hand-edited documents hold `null`, numbers or strings here. The stored value is written
/// back untouched; [`StoredText::as_text`] gives the readable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredText(Value);

impl StoredText {
    /// Returns the field as text: strings as-is, `null` as empty, anything else as JSON.
    pub fn as_text(&self) -> String {
        match &self.0 {
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl From<&str> for StoredText {
    fn from(text: &str) -> Self {
        Self(Value::String(text.to_string()))
    }
}

/// Deserialize a field that is present in the document, whatever its value.
///
/// Paired with `#[serde(default)]` so an absent key stays `None` while `null` is kept.
fn present_text<'de, D>(deserializer: D) -> Result<Option<StoredText>, D::Error>
where
    D: Deserializer<'de>,
{
    StoredText::deserialize(deserializer).map(Some)
}

/// One entry of the photo collection.
///
/// Text fields are `None` when the key is absent from the document and are then left
/// out when writing. Fields this crate does not know about are kept in `extra` and
/// written back in their original order relative to each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: RecordId,
    #[serde(
        default,
        deserialize_with = "present_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub filename: Option<StoredText>,
    #[serde(
        default,
        deserialize_with = "present_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<StoredText>,
    #[serde(
        default,
        deserialize_with = "present_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<StoredText>,
    #[serde(
        default,
        deserialize_with = "present_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<StoredText>,
    #[serde(default)]
    pub albums: Vec<RecordId>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn text_of(field: &Option<StoredText>) -> String {
    field.as_ref().map(StoredText::as_text).unwrap_or_default()
}

impl Photo {
    pub fn filename_text(&self) -> String {
        text_of(&self.filename)
    }

    pub fn title_text(&self) -> String {
        text_of(&self.title)
    }

    pub fn description_text(&self) -> String {
        text_of(&self.description)
    }

    pub fn date_text(&self) -> String {
        text_of(&self.date)
    }
}

/// One entry of the album collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: RecordId,
    pub name: String,
}

/// Display-ready view of a photo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedPhoto {
    pub id: RecordId,
    pub filename: String,
    pub title: String,
    pub formatted_date: String,
    pub album_names: Vec<String>,
    pub tags: Vec<String>,
}

/// New values for the editable text fields of a photo.
///
/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoEdit {
    pub title: Option<EditText>,
    pub description: Option<EditText>,
}

impl PhotoEdit {
    /// Builds an edit from raw prompt answers; empty answers keep the stored value.
    pub fn from_input(title: &str, description: &str) -> Self {
        Self {
            title: EditText::from_input(title),
            description: EditText::from_input(description),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    pub fn apply(&self, photo: &mut Photo) {
        if let Some(title) = &self.title {
            photo.title = Some(StoredText::from(title.as_str()));
        }
        if let Some(description) = &self.description {
            photo.description = Some(StoredText::from(description.as_str()));
        }
    }
}
