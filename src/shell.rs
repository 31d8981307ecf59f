//! Interactive menu loop.
//!
//! The shell owns no catalog state of its own: each pass through [`Shell::step`] shows the
//! menu, reads one selection, runs the matching catalog operation and reports whether the
//! loop should keep going.

use std::io::{self, Write};

use catalog_core::constants::NO_ALBUM_NOTICE;
use catalog_core::{CatalogError, CatalogService, FormattedPhoto, PhotoEdit, RecordId};
use serde::Serialize;

use crate::prompt::Prompt;

const MENU: &str = "\n=== Photo Management Menu ===
1. Find Photo
2. Update Photo Details
3. Album Photo List
4. Tag Photo
5. Exit";

const SELECTION_PROMPT: &str = "Your selection> ";
const PHOTO_ID_PROMPT: &str = "Enter Photo ID: ";
const TITLE_PROMPT: &str = "Enter New Title: ";
const DESCRIPTION_PROMPT: &str = "Enter New description: ";
const ALBUM_NAME_PROMPT: &str = "Enter Album Name: ";
const TAG_PROMPT: &str = "Enter New Tag: ";

const INVALID_SELECTION: &str = " Invalid selection. Please enter 1–5.";
const GOODBYE: &str = "Exiting... Goodbye!";
const UNDEFINED: &str = "undefined";

/// What the menu loop should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FindPhoto,
    UpdatePhoto,
    AlbumPhotoList,
    TagPhoto,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::FindPhoto),
            "2" => Some(Self::UpdatePhoto),
            "3" => Some(Self::AlbumPhotoList),
            "4" => Some(Self::TagPhoto),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ShellError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

type ShellResult<T> = Result<T, ShellError>;

pub struct Shell<P, W> {
    catalog: CatalogService,
    prompt: P,
    out: W,
}

impl<P: Prompt, W: Write> Shell<P, W> {
    pub fn new(catalog: CatalogService, prompt: P, out: W) -> Self {
        Self {
            catalog,
            prompt,
            out,
        }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? == Flow::Continue {}
        Ok(())
    }

    /// Shows the menu once and handles a single selection.
    ///
    /// Catalog failures abandon the current action and are reported on the output; only
    /// terminal I/O failures are returned.
    pub fn step(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "{MENU}")?;
        let Some(selection) = self.prompt.ask(SELECTION_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        let Some(choice) = MenuChoice::parse(&selection) else {
            writeln!(self.out, "{INVALID_SELECTION}")?;
            return Ok(Flow::Continue);
        };

        let outcome = match choice {
            MenuChoice::FindPhoto => self.find_photo(),
            MenuChoice::UpdatePhoto => self.update_photo(),
            MenuChoice::AlbumPhotoList => self.album_photo_list(),
            MenuChoice::TagPhoto => self.tag_photo(),
            MenuChoice::Exit => {
                writeln!(self.out, "{GOODBYE}")?;
                return Ok(Flow::Exit);
            }
        };

        match outcome {
            Ok(flow) => Ok(flow),
            Err(ShellError::Io(e)) => Err(e),
            Err(ShellError::Catalog(e)) => {
                tracing::error!(error = %e, ?choice, "catalog operation failed");
                writeln!(self.out, "Error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn find_photo(&mut self) -> ShellResult<Flow> {
        let Some(answer) = self.prompt.ask(PHOTO_ID_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = self.parse_photo_id(&answer)? else {
            return Ok(Flow::Continue);
        };

        match self.catalog.format_photo(&id)? {
            Some(photo) => self.print_photo(&photo)?,
            None => writeln!(self.out, "{UNDEFINED}")?,
        }
        Ok(Flow::Continue)
    }

    fn update_photo(&mut self) -> ShellResult<Flow> {
        let Some(answer) = self.prompt.ask(PHOTO_ID_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = self.parse_photo_id(&answer)? else {
            return Ok(Flow::Continue);
        };
        if self.catalog.find_photo(&id)?.is_none() {
            return Ok(Flow::Continue);
        }

        let Some(title) = self.prompt.ask(TITLE_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let Some(description) = self.prompt.ask(DESCRIPTION_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        let edit = PhotoEdit::from_input(&title, &description);
        self.catalog.update_photo(&id, &edit)?;
        Ok(Flow::Continue)
    }

    fn album_photo_list(&mut self) -> ShellResult<Flow> {
        let Some(album_name) = self.prompt.ask(ALBUM_NAME_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        let photos = self
            .catalog
            .list_photos_in_album(&album_name.to_lowercase())?;
        self.print_json(&photos)?;
        Ok(Flow::Continue)
    }

    fn tag_photo(&mut self) -> ShellResult<Flow> {
        let Some(answer) = self.prompt.ask(PHOTO_ID_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = self.parse_photo_id(&answer)? else {
            return Ok(Flow::Continue);
        };
        if self.catalog.find_photo(&id)?.is_none() {
            return Ok(Flow::Continue);
        }

        let Some(tag) = self.prompt.ask(TAG_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        self.catalog.add_tag(&id, &tag)?;
        Ok(Flow::Continue)
    }

    /// Parses a typed photo id, reporting blank input instead of failing the loop.
    fn parse_photo_id(&mut self, answer: &str) -> ShellResult<Option<RecordId>> {
        match RecordId::parse(answer) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                writeln!(self.out, "Invalid photo id: {e}")?;
                Ok(None)
            }
        }
    }

    fn print_photo(&mut self, photo: &FormattedPhoto) -> io::Result<()> {
        self.print_json(photo)?;
        if photo.album_names.is_empty() {
            writeln!(self.out, "{NO_ALBUM_NOTICE}")?;
        }
        Ok(())
    }

    fn print_json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(self.out, "{json}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;
    use catalog_core::constants::{ALBUMS_JSON_FILENAME, PHOTOS_JSON_FILENAME};
    use catalog_core::{CatalogConfig, Notice, RecordedNotices};
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    const PHOTOS: &str = r#"[
  {"id": 1, "filename": "pier.jpg", "title": "Old", "description": "Evening walk",
   "date": "2023-05-01", "albums": [10], "tags": ["x"]},
  {"id": 2, "filename": "peak.jpg", "title": "Summit", "description": "Ridge",
   "date": "2022-12-25", "albums": [10, 20], "tags": []},
  {"id": 3, "filename": "cat.jpg", "title": "Cat", "description": "",
   "date": "2021-01-09", "albums": [99], "tags": ["pets"]}
]"#;

    const ALBUMS: &str = r#"[{"id": 10, "name": "Trips"}, {"id": 20, "name": "Mountains"}]"#;

    struct Session {
        dir: TempDir,
        notices: Arc<RecordedNotices>,
        asked: Vec<String>,
        output: String,
    }

    fn run_session(answers: &[&str]) -> Session {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("photos.json"), PHOTOS).expect("should write photos.json");
        fs::write(dir.path().join("albums.json"), ALBUMS).expect("should write albums.json");
        run_in(dir, answers)
    }

    fn run_in(dir: TempDir, answers: &[&str]) -> Session {
        let notices = Arc::new(RecordedNotices::new());
        let cfg = Arc::new(
            CatalogConfig::new(
                dir.path().to_path_buf(),
                PHOTOS_JSON_FILENAME,
                ALBUMS_JSON_FILENAME,
            )
            .expect("CatalogConfig::new should succeed"),
        );
        let catalog = CatalogService::new(cfg, notices.clone());

        let mut shell = Shell::new(
            catalog,
            ScriptedPrompt::new(answers.iter().copied()),
            Vec::new(),
        );
        shell.run().expect("shell should run to completion");

        Session {
            dir,
            notices,
            asked: shell.prompt.asked,
            output: String::from_utf8(shell.out).expect("output should be UTF-8"),
        }
    }

    fn stored(session: &Session) -> serde_json::Value {
        let raw = fs::read_to_string(session.dir.path().join("photos.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::FindPhoto));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::TagPhoto));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_exit_selection_stops_loop() {
        let session = run_session(&["5", "1"]);

        assert_eq!(session.asked, vec![SELECTION_PROMPT.to_string()]);
        assert!(session.output.contains("=== Photo Management Menu ==="));
        assert!(session.output.ends_with("Exiting... Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let session = run_session(&[]);

        assert_eq!(session.asked.len(), 1);
        assert!(!session.output.contains(GOODBYE));
    }

    #[test]
    fn test_invalid_selection_returns_to_menu() {
        let session = run_session(&["9", "5"]);

        assert!(session.output.contains(INVALID_SELECTION));
        assert_eq!(session.output.matches("5. Exit").count(), 2);
    }

    #[test]
    fn test_find_photo_prints_formatted_record() {
        let session = run_session(&["1", "1", "5"]);

        assert!(session.output.contains("\"formattedDate\": \"May 1, 2023\""));
        assert!(session.output.contains("\"albumNames\": [\n    \"trips\"\n  ]"));
        assert!(!session.output.contains("description"));
        assert!(!session.output.contains(NO_ALBUM_NOTICE));
    }

    #[test]
    fn test_find_photo_without_albums_prints_empty_state() {
        let session = run_session(&["1", "3", "5"]);

        assert!(session.output.contains("\"albumNames\": []"));
        assert!(session.output.contains(NO_ALBUM_NOTICE));
    }

    #[test]
    fn test_find_missing_photo_prints_undefined() {
        let session = run_session(&["1", "42", "5"]);

        assert!(session.output.contains("\nundefined\n"));
        assert_eq!(
            session.notices.snapshot(),
            vec![Notice::PhotoNotFound {
                id: RecordId::from(42)
            }]
        );
    }

    #[test]
    fn test_blank_photo_id_is_reported() {
        let session = run_session(&["1", "   ", "5"]);

        assert!(session.output.contains("Invalid photo id"));
        assert!(session.output.contains(GOODBYE));
    }

    #[test]
    fn test_update_photo_changes_title_only() {
        let session = run_session(&["2", "1", "New Title", "", "5"]);

        let photos = stored(&session);
        assert_eq!(photos[0]["title"], "New Title");
        assert_eq!(photos[0]["description"], "Evening walk");
        assert!(session.asked.contains(&DESCRIPTION_PROMPT.to_string()));
        assert_eq!(
            session.notices.snapshot(),
            vec![Notice::FileUpdated {
                path: session.dir.path().join("photos.json")
            }]
        );
    }

    #[test]
    fn test_update_missing_photo_skips_edit_prompts() {
        let session = run_session(&["2", "42", "5"]);

        assert!(!session.asked.contains(&TITLE_PROMPT.to_string()));
        assert_eq!(session.notices.snapshot().len(), 1);
        let raw = fs::read_to_string(session.dir.path().join("photos.json")).unwrap();
        assert_eq!(raw, PHOTOS);
    }

    #[test]
    fn test_album_list_lowercases_query() {
        let session = run_session(&["3", "TRIPS", "5"]);

        assert!(session.output.contains("pier.jpg"));
        assert!(session.output.contains("peak.jpg"));
        assert!(!session.output.contains("cat.jpg"));
    }

    #[test]
    fn test_tag_photo_appends_tag() {
        let session = run_session(&["4", "2", "vacation", "5"]);

        let photos = stored(&session);
        assert_eq!(photos[1]["tags"], serde_json::json!(["vacation"]));
        assert!(session.asked.contains(&TAG_PROMPT.to_string()));
    }

    #[test]
    fn test_catalog_error_is_reported_and_loop_continues() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("photos.json"), PHOTOS).unwrap();

        let session = run_in(dir, &["1", "1", "5"]);

        assert!(session.output.contains("Error: failed to read"));
        assert!(session.output.contains("albums.json"));
        assert!(session.output.contains(GOODBYE));
    }
}
