use std::io;
use std::sync::Arc;

use catalog_core::constants::{
    ALBUMS_FILE_ENV_VAR, ALBUMS_JSON_FILENAME, DATA_DIR_ENV_VAR, PHOTOS_FILE_ENV_VAR,
    PHOTOS_JSON_FILENAME,
};
use catalog_core::{CatalogConfig, CatalogService, ConsoleNotices, data_dir_from_env_value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod prompt;
mod shell;

use prompt::StdinPrompt;
use shell::Shell;

/// Interactive entry point for the photo catalog.
///
/// Reads `photos.json` and `albums.json` from the data directory and runs the menu until
/// the user picks "Exit" or standard input closes.
///
/// # Environment Variables
/// - `PHOTO_CATALOG_DATA_DIR`: directory holding the catalog documents (default: ".")
/// - `PHOTO_CATALOG_PHOTOS_FILE`: photo collection file name (default: "photos.json")
/// - `PHOTO_CATALOG_ALBUMS_FILE`: album collection file name (default: "albums.json")
/// - `RUST_LOG`: log filter; logs go to stderr
///
/// Once the menu is running the process always exits with status 0; failures of
/// individual actions are reported and the menu is shown again.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("photo_catalog=warn".parse()?)
                .add_directive("catalog_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let data_dir = data_dir_from_env_value(std::env::var(DATA_DIR_ENV_VAR).ok());
    let photos_file =
        std::env::var(PHOTOS_FILE_ENV_VAR).unwrap_or_else(|_| PHOTOS_JSON_FILENAME.into());
    let albums_file =
        std::env::var(ALBUMS_FILE_ENV_VAR).unwrap_or_else(|_| ALBUMS_JSON_FILENAME.into());
    let cfg = Arc::new(CatalogConfig::new(data_dir, photos_file, albums_file)?);
    tracing::debug!(data_dir = %cfg.data_dir().display(), "catalog configured");

    let catalog = CatalogService::new(cfg, Arc::new(ConsoleNotices));
    let mut shell = Shell::new(catalog, StdinPrompt::stdin(), io::stdout());

    if let Err(e) = shell.run() {
        tracing::error!(error = %e, "terminal I/O failed");
    }

    Ok(())
}
