//! Wiki link scanning
//!
//! Finds `[[target]]` and `[[target|display]]` references in note text.
//! Offsets are byte offsets into the scanned text.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants as C;
use crate::note_resolver;

static WIKI_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid wiki link regex"));

/// A `[[...]]` occurrence in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WikiLink {
    /// Identifier or title the link points at
    pub link_text: String,
    /// Text to render in place of the link
    pub display_text: String,
    /// Byte offset of the opening `[`
    pub start: usize,
    /// Length of the whole match, brackets included
    pub len: usize,
    /// Resolved note, only set when scanning against a vault
    pub target_file: Option<PathBuf>,
    /// Whether `target_file` is set and present on disk
    pub exists: bool,
}

impl WikiLink {
    /// Byte offset just past the closing `]]`
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether a caret at `offset` is on this link.
    /// The end is inclusive so a caret right behind `]]` still hits.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end()
    }
}

/// Iterator over the wiki links of a text, left to right
#[derive(Debug, Clone)]
pub struct WikiLinks<'t> {
    text: &'t str,
    root: Option<&'t Path>,
    pos: usize,
}

impl<'t> Iterator for WikiLinks<'t> {
    type Item = WikiLink;

    fn next(&mut self) -> Option<WikiLink> {
        if self.pos > self.text.len() {
            return None;
        }

        let caps = WIKI_LINK_RE.captures_at(self.text, self.pos)?;
        let whole = caps.get(0)?;
        let inner = caps.get(1)?.as_str();
        self.pos = whole.end();

        let (link_text, display_text) = match inner.split_once(C::LINK_ALIAS_SEPARATOR) {
            Some((target, display)) => (target.trim(), display.trim()),
            None => (inner.trim(), inner.trim()),
        };

        let mut link = WikiLink {
            link_text: link_text.to_string(),
            display_text: display_text.to_string(),
            start: whole.start(),
            len: whole.len(),
            target_file: None,
            exists: false,
        };

        if let Some(root) = self.root {
            if !link.link_text.is_empty() {
                link.target_file = note_resolver::resolve_link(&link.link_text, root);
                link.exists = link.target_file.as_deref().map(Path::exists).unwrap_or(false);
            }
        }

        Some(link)
    }
}

/// Scan `text` for wiki links without resolving them
pub fn scan(text: &str) -> WikiLinks<'_> {
    WikiLinks { text, root: None, pos: 0 }
}

/// Scan `text` for wiki links and resolve each against the vault at `root`.
///
/// Resolution walks the vault for every link; nothing is cached.
pub fn scan_in<'t>(text: &'t str, root: &'t Path) -> WikiLinks<'t> {
    WikiLinks { text, root: Some(root), pos: 0 }
}

/// First link whose span contains the byte `offset`
pub fn link_at(text: &str, offset: usize) -> Option<WikiLink> {
    scan(text).find(|link| link.contains(offset))
}
