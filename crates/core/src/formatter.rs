//! Display formatting for photos.

use crate::constants::LONG_DATE_FORMAT;
use crate::error::{CatalogError, CatalogResult};
use crate::model::{FormattedPhoto, Photo};
use crate::service::CatalogService;
use catalog_types::RecordId;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

impl CatalogService {
    /// Builds the display view of the photo with the given id.
    ///
    /// Returns `Ok(None)` when no photo matches (the lookup emits its own notice).
    ///
    /// # Errors
    ///
    /// Store errors propagate, as does [`CatalogError::InvalidDate`] if the stored date
    /// cannot be parsed.
    pub fn format_photo(&self, id: &RecordId) -> CatalogResult<Option<FormattedPhoto>> {
        match self.find_photo(id)? {
            Some(photo) => self.format_record(&photo).map(Some),
            None => Ok(None),
        }
    }

    pub(crate) fn format_record(&self, photo: &Photo) -> CatalogResult<FormattedPhoto> {
        let formatted_date = format_long_date(&photo.date_text())?;
        let album_names = self.resolve_album_names(&photo.albums)?;

        Ok(FormattedPhoto {
            id: photo.id.clone(),
            filename: photo.filename_text(),
            title: photo.title_text(),
            formatted_date,
            album_names,
            tags: photo.tags.clone(),
        })
    }
}

/// Renders a stored calendar date as "Month D, YYYY".
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, RFC 3339 timestamps and offset-less
/// `YYYY-MM-DDTHH:MM:SS`; timestamps contribute only their calendar date.
pub fn format_long_date(value: &str) -> CatalogResult<String> {
    let date = parse_calendar_date(value.trim()).ok_or_else(|| CatalogError::InvalidDate {
        value: value.to_string(),
    })?;
    Ok(date.format(LONG_DATE_FORMAT).to_string())
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, LOCAL_DATE_TIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}
