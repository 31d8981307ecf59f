//! # Catalog Core
//!
//! Data access and formatting for the photo catalog.
//!
//! The catalog is two JSON documents in a data directory:
//! - `photos.json`: an array of [`Photo`] records, read and rewritten in full
//! - `albums.json`: an array of [`Album`] records, read only
//!
//! [`CatalogService`] exposes the operations the shell and CLI need: photo lookup, album
//! name resolution, display formatting, title/description edits, tagging and album
//! listings.
//!
//! **No interaction concerns**: prompts, menus and argument parsing belong in the
//! binaries. Non-fatal outcomes (a photo that does not exist, a successful write) are
//! reported through a [`NoticeSink`] rather than printed from here.

mod album_list;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatter;
mod lookup;
pub mod model;
pub mod notice;
mod mutators;
mod service;
pub mod store;

pub use catalog_types::{EditText, RecordId, TypesError};
pub use config::{data_dir_from_env_value, CatalogConfig};
pub use error::{CatalogError, CatalogResult};
pub use formatter::format_long_date;
pub use model::{Album, FormattedPhoto, Photo, PhotoEdit, StoredText};
pub use notice::{ConsoleNotices, Notice, NoticeSink, RecordedNotices};
pub use service::CatalogService;
pub use store::JsonStore;
