//! Whole-document JSON storage for the photo and album collections.
//!
//! Both collections are read in full and the photo collection is written in full. There is
//! no locking: if another process edits a file between a load and a save, the save wins.

use crate::config::CatalogConfig;
use crate::constants::TEMP_FILE_SUFFIX;
use crate::error::{CatalogError, CatalogResult};
use crate::model::{Album, Photo};
use crate::notice::{Notice, NoticeSink};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Reads and writes the catalog documents named by a [`CatalogConfig`].
#[derive(Clone)]
pub struct JsonStore {
    cfg: Arc<CatalogConfig>,
    notices: Arc<dyn NoticeSink>,
}

impl JsonStore {
    pub fn new(cfg: Arc<CatalogConfig>, notices: Arc<dyn NoticeSink>) -> Self {
        Self { cfg, notices }
    }

    /// Loads the full photo collection.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::FileRead`] if `photos.json` is missing or unreadable
    /// - [`CatalogError::Deserialization`] if it is not a JSON array of photos
    pub fn load_photos(&self) -> CatalogResult<Vec<Photo>> {
        read_collection(&self.cfg.photos_path())
    }

    /// Loads the full album collection.
    ///
    /// # Errors
    ///
    /// Same as [`JsonStore::load_photos`], for `albums.json`.
    pub fn load_albums(&self) -> CatalogResult<Vec<Album>> {
        read_collection(&self.cfg.albums_path())
    }

    /// Overwrites `photos.json` with `photos`, pretty-printed with two-space indentation.
    ///
    /// The document is first written next to the target and then renamed over it, so a
    /// failed save leaves the previous contents in place. Emits [`Notice::FileUpdated`]
    /// once the rename has succeeded.
    pub fn save_photos(&self, photos: &[Photo]) -> CatalogResult<()> {
        let path = self.cfg.photos_path();
        let json = serde_json::to_string_pretty(photos).map_err(CatalogError::Serialization)?;

        replace_file(&path, json.as_bytes())?;

        tracing::info!(path = %path.display(), count = photos.len(), "photos written");
        self.notices.notify(Notice::FileUpdated { path });
        Ok(())
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> CatalogResult<Vec<T>> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<T> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Deserialization {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), count = records.len(), "collection loaded");
    Ok(records)
}

fn replace_file(path: &Path, contents: &[u8]) -> CatalogResult<()> {
    let temp_path = temp_path_for(path);
    let write_error = |source| CatalogError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Err(e) = fs::write(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(e));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_error(e)
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(TEMP_FILE_SUFFIX);
    path.with_file_name(name)
}
