//! NoteEngine - note creation in a vault
//!
//! Provides:
//! - Zettel notes with generated identifiers
//! - Daily notes (open-or-create)
//! - Notes for dangling wiki links
//!
//! The identifier engine only hands out IDs; file names and starter content
//! are decided here.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::constants as C;
use crate::error::{Error, Result};
use crate::util;
use crate::zettel;

/// Outcome of opening a daily note
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyNote {
    Created(PathBuf),
    Existing(PathBuf),
}

impl DailyNote {
    pub fn path(&self) -> &Path {
        match self {
            DailyNote::Created(p) | DailyNote::Existing(p) => p,
        }
    }
}

/// Note operations on one vault
pub struct NoteEngine {
    root: PathBuf,
}

impl NoteEngine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // === Zettel Notes ===

    /// Create a Zettel note with a freshly generated ID.
    ///
    /// Without a parent the note gets the next top-level ID, otherwise the
    /// next free child of `parent`.
    pub fn create_zettel(&self, parent: Option<&str>, title: Option<&str>) -> Result<PathBuf> {
        let id = zettel::generate_next(parent.unwrap_or(""), &self.root)?;
        self.write_zettel(&id, title.unwrap_or(""))
    }

    fn write_zettel(&self, id: &str, title: &str) -> Result<PathBuf> {
        let title = title.trim();
        let content = if title.is_empty() {
            format!("{}\n\n", id)
        } else {
            format!("{} {}\n\n", id, title)
        };
        self.write_new(&util::zettel_file_name(id, title), &content)
    }

    // === Daily Notes ===

    /// Open or create today's daily note
    pub fn daily_note(&self) -> Result<DailyNote> {
        self.daily_note_on(Local::now().date_naive())
    }

    /// Open or create the daily note for `date`
    pub fn daily_note_on(&self, date: NaiveDate) -> Result<DailyNote> {
        let date_str = date.format(C::DAILY_DATE_FORMAT).to_string();
        let file_name = format!("{}{}", date_str, C::MARKDOWN_EXTENSION);
        let content = C::DAILY_NOTE_TEMPLATE.replace("{date}", &date_str);

        match self.write_new(&file_name, &content) {
            Ok(path) => Ok(DailyNote::Created(path)),
            Err(Error::NoteExists(path)) => Ok(DailyNote::Existing(path)),
            Err(e) => Err(e),
        }
    }

    // === Link Targets ===

    /// Create the note a dangling link points to.
    ///
    /// A token starting with a Zettel ID (`1c Some idea`) creates a Zettel note,
    /// anything else a note titled by the token.
    pub fn create_for_link(&self, token: &str) -> Result<PathBuf> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::InvalidNoteName(token.to_string()));
        }

        let parsed = zettel::parse(token);
        if parsed.is_valid {
            return self.write_zettel(&parsed.id, &parsed.title);
        }

        let content = format!("# {}\n\n", token);
        self.write_new(&util::note_file_name(token), &content)
    }

    /// Write a new file in the vault, never replacing an existing one
    fn write_new(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = util::secure_path(&self.root, file_name)
            .map_err(|_| Error::InvalidNoteName(file_name.to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(Error::NoteExists(path));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(content.as_bytes())?;

        log::debug!("Created note {}", path.display());
        Ok(path)
    }
}
