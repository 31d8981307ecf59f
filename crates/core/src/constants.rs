//! Constants used throughout the catalog core crate.
//!
//! File names, environment variable names and user-facing notice text live here so the
//! shell, the CLI and the tests all agree on them.

/// Filename for the photo collection.
pub const PHOTOS_JSON_FILENAME: &str = "photos.json";

/// Filename for the album collection.
pub const ALBUMS_JSON_FILENAME: &str = "albums.json";

/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = ".";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "PHOTO_CATALOG_DATA_DIR";

/// Environment variable overriding the photo collection file name.
pub const PHOTOS_FILE_ENV_VAR: &str = "PHOTO_CATALOG_PHOTOS_FILE";

/// Environment variable overriding the album collection file name.
pub const ALBUMS_FILE_ENV_VAR: &str = "PHOTO_CATALOG_ALBUMS_FILE";

/// Suffix of the scratch file used while replacing a collection on disk.
pub const TEMP_FILE_SUFFIX: &str = ".tmp";

/// Empty-state text shown when a photo resolves to no album names.
pub const NO_ALBUM_NOTICE: &str = "No Album for this ID";

/// Notice emitted when a lookup finds no photo.
pub const PHOTO_NOT_FOUND_NOTICE: &str = "no photo found with this id";

/// Notice emitted after the photo collection has been written.
pub const FILE_UPDATED_NOTICE: &str = "file updated";

/// Long-form date rendering, e.g. "May 1, 2023".
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";
