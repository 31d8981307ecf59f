use crate::error::CatalogResult;
use crate::model::FormattedPhoto;
use crate::service::CatalogService;

impl CatalogService {
    /// Lists the formatted photos that belong to the album named `album_name`.
    ///
    /// Album names are resolved in lower case, and the comparison is exact, so callers
    /// should lower-case `album_name` first. Each photo resolves its albums independently.
    ///
    /// # Errors
    ///
    /// Any photo with an unparseable date fails the whole listing.
    pub fn list_photos_in_album(&self, album_name: &str) -> CatalogResult<Vec<FormattedPhoto>> {
        let photos = self.store().load_photos()?;

        let mut listed = Vec::new();
        for photo in &photos {
            let formatted = self.format_record(photo)?;
            if formatted.album_names.iter().any(|name| name == album_name) {
                listed.push(formatted);
            }
        }

        tracing::debug!(album = album_name, count = listed.len(), "album listed");
        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::CatalogError;
    use crate::test_support::{fixture, SAMPLE_ALBUMS, SAMPLE_PHOTOS};
    use catalog_types::RecordId;

    #[test]
    fn test_list_photos_in_album_keeps_file_order() {
        let fx = fixture(SAMPLE_PHOTOS, SAMPLE_ALBUMS);

        let listed = fx.service.list_photos_in_album("trips").unwrap();

        let ids: Vec<RecordId> = listed.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec![RecordId::from(1), RecordId::from(2)]);
        assert_eq!(listed[1].album_names, vec!["trips", "mountains"]);
    }

    #[test]
    fn test_list_photos_in_album_is_case_sensitive() {
        let fx = fixture(SAMPLE_PHOTOS, SAMPLE_ALBUMS);

        assert!(fx.service.list_photos_in_album("Trips").unwrap().is_empty());
        assert_eq!(fx.service.list_photos_in_album("mountains").unwrap().len(), 1);
    }

    #[test]
    fn test_list_photos_in_unknown_album_is_empty() {
        let fx = fixture(SAMPLE_PHOTOS, SAMPLE_ALBUMS);

        assert!(fx.service.list_photos_in_album("family").unwrap().is_empty());
        assert!(fx.service.list_photos_in_album("").unwrap().is_empty());
    }

    #[test]
    fn test_list_photos_in_album_fails_on_bad_date() {
        let photos = r#"[
  {"id": 1, "date": "2023-05-01", "albums": [10]},
  {"id": 2, "date": "someday", "albums": [20]}
]"#;
        let fx = fixture(photos, SAMPLE_ALBUMS);

        let err = fx
            .service
            .list_photos_in_album("trips")
            .expect_err("bad date should fail the listing");

        assert!(matches!(err, CatalogError::InvalidDate { .. }));
    }
}
