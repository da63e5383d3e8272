pub mod backlinks;
pub mod cli;
pub mod constants;
pub mod context;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod note_resolver;
pub mod search;
pub mod util;
pub mod wikilink;
pub mod zettel;

pub use backlinks::find_backlinks;
pub use cli::{Cli, Command};
pub use context::VaultContext;
pub use corpus::NoteFile;
pub use engine::{DailyNote, NoteEngine};
pub use error::{Error, Result};
pub use note_resolver::{resolve_by_id, resolve_by_title, resolve_link};
pub use wikilink::WikiLink;
pub use zettel::ZettelId;
