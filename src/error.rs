//! Error types for the note engine

use std::io;
use std::path::PathBuf;

/// Errors raised by identifier generation and note creation.
///
/// Resolution misses and malformed identifiers are not errors: they surface as
/// `None` and `ZettelId::is_valid == false` respectively.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid parent Zettel ID: '{0}'")]
    InvalidParentId(String),

    #[error("no free child ID left under '{parent}'")]
    ChildSpaceExhausted { parent: String },

    #[error("note already exists: {}", .0.display())]
    NoteExists(PathBuf),

    #[error("invalid note name: '{0}'")]
    InvalidNoteName(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            Error::NoteExists(path) => io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("note already exists: {}", path.display()),
            ),
            other => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
        }
    }
}
