//! Catalog runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the catalog service.
//! Nothing below reads environment variables itself; binaries read them and hand the raw
//! values to the helpers here.

use crate::constants::DEFAULT_DATA_DIR;
use crate::{CatalogError, CatalogResult};
use std::path::{Path, PathBuf};

/// Catalog configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    data_dir: PathBuf,
    photos_file: String,
    albums_file: String,
}

impl CatalogConfig {
    /// Create a new `CatalogConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidInput`] if either file name is blank.
    pub fn new(
        data_dir: PathBuf,
        photos_file: impl Into<String>,
        albums_file: impl Into<String>,
    ) -> CatalogResult<Self> {
        let photos_file = photos_file.into();
        let albums_file = albums_file.into();

        if photos_file.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "photos file name cannot be empty".into(),
            ));
        }
        if albums_file.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "albums file name cannot be empty".into(),
            ));
        }

        Ok(Self {
            data_dir,
            photos_file,
            albums_file,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn photos_path(&self) -> PathBuf {
        self.data_dir.join(&self.photos_file)
    }

    pub fn albums_path(&self) -> PathBuf {
        self.data_dir.join(&self.albums_file)
    }
}

/// Resolve the data directory from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, the working directory is used.
pub fn data_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ALBUMS_JSON_FILENAME, PHOTOS_JSON_FILENAME};

    #[test]
    fn test_new_joins_file_names_onto_data_dir() {
        let cfg = CatalogConfig::new(
            PathBuf::from("/srv/catalog"),
            PHOTOS_JSON_FILENAME,
            ALBUMS_JSON_FILENAME,
        )
        .expect("standard file names should be accepted");

        assert_eq!(cfg.data_dir(), Path::new("/srv/catalog"));
        assert_eq!(cfg.photos_path(), PathBuf::from("/srv/catalog/photos.json"));
        assert_eq!(cfg.albums_path(), PathBuf::from("/srv/catalog/albums.json"));
    }

    #[test]
    fn test_new_accepts_custom_file_names() {
        let cfg = CatalogConfig::new(PathBuf::from("lib"), "shots.json", "sets.json")
            .expect("custom file names should be accepted");

        assert_eq!(cfg.photos_path(), PathBuf::from("lib/shots.json"));
        assert_eq!(cfg.albums_path(), PathBuf::from("lib/sets.json"));
    }

    #[test]
    fn test_new_rejects_blank_file_names() {
        let err = CatalogConfig::new(PathBuf::from("."), " ", "albums.json")
            .expect_err("blank photos file name should fail");
        assert!(matches!(err, CatalogError::InvalidInput(_)));

        let err = CatalogConfig::new(PathBuf::from("."), "photos.json", "")
            .expect_err("blank albums file name should fail");
        assert!(matches!(err, CatalogError::InvalidInput(_)));
    }

    #[test]
    fn test_data_dir_from_env_value_defaults_when_blank() {
        assert_eq!(data_dir_from_env_value(None), PathBuf::from("."));
        assert_eq!(
            data_dir_from_env_value(Some("   ".into())),
            PathBuf::from(".")
        );
        assert_eq!(
            data_dir_from_env_value(Some(" /data/photos ".into())),
            PathBuf::from("/data/photos")
        );
    }
}
