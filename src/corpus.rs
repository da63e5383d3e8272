//! Corpus scanning
//!
//! The corpus is every `.md`, `.markdown` or `.txt` file below a vault root.
//! Nothing is indexed: each call walks the directory tree again. Directory
//! entries are visited sorted by file name, so "first match" is the same on
//! every platform.

use std::collections::{BTreeMap, HashSet};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants as C;
use crate::zettel;

/// A note file found during a corpus walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    pub path: PathBuf,
    /// File name without its extension
    pub base_name: String,
}

impl NoteFile {
    pub fn new(path: PathBuf) -> Self {
        let base_name = base_name(&path);
        Self { path, base_name }
    }

    /// First line of the file, read on demand
    pub fn first_line(&self) -> String {
        first_line(&self.path)
    }

    /// Heading text of the first line, or the base name
    pub fn title(&self) -> String {
        heading_text(&self.first_line())
            .map(str::to_string)
            .unwrap_or_else(|| self.base_name.clone())
    }

    /// Zettel ID from the file name, falling back to the first line
    pub fn zettel_id(&self) -> String {
        let from_name = extract_id_from_filename(&self.base_name);
        if !from_name.is_empty() {
            return from_name;
        }

        let parsed = zettel::parse(&self.first_line());
        if parsed.is_valid {
            parsed.id
        } else {
            String::new()
        }
    }
}

/// Check whether a path has one of the note extensions (case-insensitive)
pub fn is_note_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            C::NOTE_EXTENSIONS.iter().any(|candidate| *candidate == ext)
        })
        .unwrap_or(false)
}

/// Walk `root` recursively and yield every note file path.
///
/// Symlinks are followed. Entries that cannot be read (permissions, dangling
/// links, loops, removed mid-walk) are skipped.
pub fn list_note_files(root: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_note_file(entry.path()))
        .map(|entry| entry.into_path())
}

/// Walk `root` and yield a `NoteFile` for every note
pub fn notes(root: &Path) -> impl Iterator<Item = NoteFile> + '_ {
    list_note_files(root).map(NoteFile::new)
}

/// File name without its extension
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// First line of a file without the line terminator.
///
/// Returns an empty string for empty or unreadable files.
pub fn first_line(path: &Path) -> String {
    match read_first_line(path) {
        Ok(line) => line,
        Err(e) => {
            log::debug!("Cannot read first line of {}: {}", path.display(), e);
            String::new()
        }
    }
}

fn read_first_line(path: &Path) -> io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;

    let line = String::from_utf8_lossy(&buf);
    let line = line.strip_prefix('\u{feff}').unwrap_or(&line);
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Read a whole note, decoding invalid UTF-8 lossily
pub fn read_note(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Text of a markdown heading line (`# Title` → `Title`), if it is one
pub fn heading_text(line: &str) -> Option<&str> {
    if !line.starts_with(C::HEADING_MARKER) {
        return None;
    }
    Some(line.trim_start_matches(C::HEADING_MARKER).trim())
}

/// Zettel ID prefix of a file name (`1a-notes` → `1a`), or an empty string
pub fn extract_id_from_filename(name: &str) -> String {
    zettel::id_prefix(name).to_string()
}

/// Collect every Zettel ID used in the corpus
pub fn enumerate_all_ids(root: &Path) -> HashSet<String> {
    let ids: HashSet<String> = notes(root)
        .map(|note| note.zettel_id())
        .filter(|id| !id.is_empty())
        .collect();

    log::debug!("Found {} Zettel IDs under {}", ids.len(), root.display());
    ids
}

/// Zettel IDs claimed by more than one file, with the files claiming them
pub fn duplicate_ids(root: &Path) -> BTreeMap<String, Vec<PathBuf>> {
    let mut claims: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

    for note in notes(root) {
        let id = note.zettel_id();
        if !id.is_empty() {
            claims.entry(id).or_default().push(note.path);
        }
    }

    claims.retain(|_, paths| paths.len() > 1);
    claims
}
