//! Photo and album lookups.

use crate::error::CatalogResult;
use crate::model::Photo;
use crate::notice::Notice;
use crate::service::CatalogService;
use catalog_types::RecordId;

impl CatalogService {
    /// Finds the first photo whose id matches `id`.
    ///
    /// A miss is not an error: it emits one [`Notice::PhotoNotFound`] and returns `Ok(None)`.
    pub fn find_photo(&self, id: &RecordId) -> CatalogResult<Option<Photo>> {
        let photos = self.store().load_photos()?;
        Ok(self.locate_photo(&photos, id).cloned())
    }

    /// Resolves album ids to lower-cased album names, in album-file order.
    ///
    /// Ids with no matching album are skipped, so the result may be empty.
    pub fn resolve_album_names(&self, album_ids: &[RecordId]) -> CatalogResult<Vec<String>> {
        let albums = self.store().load_albums()?;

        Ok(albums
            .into_iter()
            .filter(|album| album_ids.contains(&album.id))
            .map(|album| album.name.to_lowercase())
            .collect())
    }

    pub(crate) fn locate_photo<'a>(&self, photos: &'a [Photo], id: &RecordId) -> Option<&'a Photo> {
        let found = photos.iter().find(|photo| &photo.id == id);
        if found.is_none() {
            tracing::warn!(%id, "photo not found");
            self.notices().notify(Notice::PhotoNotFound { id: id.clone() });
        }
        found
    }
}
