//! Edits to the photo collection.
//!
//! Every edit loads the full collection, changes it in memory and writes the whole
//! collection back.

use crate::error::CatalogResult;
use crate::model::PhotoEdit;
use crate::service::CatalogService;
use catalog_types::RecordId;

impl CatalogService {
    /// Applies `edit` to the photo with the given id and saves the collection.
    ///
    /// Returns `Ok(false)` without writing anything if no photo matches; the lookup's
    /// not-found notice is the only report. Only the first matching entry is replaced.
    pub fn update_photo(&self, id: &RecordId, edit: &PhotoEdit) -> CatalogResult<bool> {
        let mut photos = self.store().load_photos()?;
        let Some(mut updated) = self.locate_photo(&photos, id).cloned() else {
            return Ok(false);
        };

        edit.apply(&mut updated);

        if let Some(slot) = photos.iter_mut().find(|photo| photo.id == updated.id) {
            *slot = updated;
        }

        self.store().save_photos(&photos)?;
        tracing::info!(%id, "photo details updated");
        Ok(true)
    }

    /// Appends `tag` to the photo with the given id and saves the collection.
    ///
    /// Every entry sharing the id receives the tag. Returns `Ok(false)` without writing
    /// anything if no photo matches.
    pub fn add_tag(&self, id: &RecordId, tag: &str) -> CatalogResult<bool> {
        let mut photos = self.store().load_photos()?;
        let Some(target) = self.locate_photo(&photos, id).map(|photo| photo.id.clone()) else {
            return Ok(false);
        };

        let mut tagged = 0usize;
        for photo in photos.iter_mut().filter(|photo| photo.id == target) {
            photo.tags.push(tag.to_string());
            tagged += 1;
        }

        self.store().save_photos(&photos)?;
        tracing::info!(%id, tag, tagged, "tag added");
        Ok(true)
    }
}
