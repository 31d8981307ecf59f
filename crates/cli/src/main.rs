use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use catalog_core::constants::{
    ALBUMS_FILE_ENV_VAR, ALBUMS_JSON_FILENAME, DATA_DIR_ENV_VAR, NO_ALBUM_NOTICE,
    PHOTOS_FILE_ENV_VAR, PHOTOS_JSON_FILENAME,
};
use catalog_core::{
    data_dir_from_env_value, CatalogConfig, CatalogService, ConsoleNotices, PhotoEdit, RecordId,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Photo catalog command line")]
struct Cli {
    /// Directory holding photos.json and albums.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Show one photo with its date and album names
    Find {
        /// Photo ID
        id: String,
    },
    /// Update the title and/or description of a photo
    Update {
        /// Photo ID
        id: String,
        /// New title (omit or pass an empty string to keep the current one)
        #[arg(long, default_value = "")]
        title: String,
        /// New description (omit or pass an empty string to keep the current one)
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List the photos in an album
    Album {
        /// Album name (case-insensitive)
        name: String,
    },
    /// Append a tag to a photo
    Tag {
        /// Photo ID
        id: String,
        /// Tag to append
        tag: String,
    },
}

/// Picks the data directory: `--data-dir` first, then the environment, then ".".
fn resolve_data_dir(flag: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    flag.unwrap_or_else(|| data_dir_from_env_value(env_value))
}

/// Runs one subcommand against the catalog, writing its output to `out`.
fn run<W: Write>(
    catalog: &CatalogService,
    command: Option<Commands>,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Some(Commands::Find { id }) => {
            let id = RecordId::parse(&id)?;
            match catalog.format_photo(&id)? {
                Some(photo) => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&photo)?)?;
                    if photo.album_names.is_empty() {
                        writeln!(out, "{NO_ALBUM_NOTICE}")?;
                    }
                }
                None => writeln!(out, "undefined")?,
            }
        }
        Some(Commands::Update {
            id,
            title,
            description,
        }) => {
            let id = RecordId::parse(&id)?;
            let edit = PhotoEdit::from_input(&title, &description);
            if edit.is_empty() {
                tracing::info!(%id, "no new values given; rewriting unchanged record");
            }
            catalog.update_photo(&id, &edit)?;
        }
        Some(Commands::Album { name }) => {
            let photos = catalog.list_photos_in_album(&name.to_lowercase())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&photos)?)?;
        }
        Some(Commands::Tag { id, tag }) => {
            let id = RecordId::parse(&id)?;
            catalog.add_tag(&id, &tag)?;
        }
        None => {
            writeln!(out, "Use 'catalog --help' for commands")?;
        }
    }

    Ok(())
}

/// Scripting entry point for the photo catalog.
///
/// # Environment Variables
/// - `PHOTO_CATALOG_DATA_DIR`: data directory when `--data-dir` is not given (default: ".")
/// - `PHOTO_CATALOG_PHOTOS_FILE`: photo collection file name (default: "photos.json")
/// - `PHOTO_CATALOG_ALBUMS_FILE`: album collection file name (default: "albums.json")
/// - `RUST_LOG`: log filter; logs go to stderr
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("catalog=warn".parse()?)
                .add_directive("catalog_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir, std::env::var(DATA_DIR_ENV_VAR).ok());
    let photos_file =
        std::env::var(PHOTOS_FILE_ENV_VAR).unwrap_or_else(|_| PHOTOS_JSON_FILENAME.into());
    let albums_file =
        std::env::var(ALBUMS_FILE_ENV_VAR).unwrap_or_else(|_| ALBUMS_JSON_FILENAME.into());
    let cfg = Arc::new(CatalogConfig::new(data_dir, photos_file, albums_file)?);
    let catalog = CatalogService::new(cfg, Arc::new(ConsoleNotices));

    run(&catalog, cli.command, &mut io::stdout())
}
