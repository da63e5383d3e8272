//! Zettelkasten identifiers
//!
//! An identifier alternates numeric and alphabetic runs: `1`, `1a`, `1a1`,
//! `2b3c`. A numeric run is one token regardless of its length, so `11` is
//! the eleventh top-level note and never "1 then 1".
//!
//! Children of an ID ending in a digit get a letter (`1` → `1a`, `1b`, ...),
//! children of an ID ending in a letter get a number (`1a` → `1a1`, `1a2`, ...).

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants as C;
use crate::corpus;
use crate::error::{Error, Result};

/// Grammar anchored at the start only (prefix match)
static ID_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:[a-z]+[0-9]*)*").expect("valid zettel prefix regex"));

/// Grammar anchored at both ends
static ID_FULL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:[a-z]+[0-9]*)*$").expect("valid zettel id regex"));

static TOP_LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid top-level regex"));

/// A parsed Zettel identifier with its optional title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ZettelId {
    /// The identifier (`1`, `1a`, `1a1`, ...), empty when nothing matched
    pub id: String,
    /// Free text after the identifier, separator stripped
    pub title: String,
    /// Whether `id` matches the full grammar
    pub is_valid: bool,
}

impl ZettelId {
    /// Whether this is a top-level identifier (digits only)
    pub fn is_top_level(&self) -> bool {
        self.is_valid && TOP_LEVEL_RE.is_match(&self.id)
    }
}

/// Parse an identifier at the start of `text`.
///
/// The text does not have to be consumed entirely: `"1a2 - Title"` yields the
/// ID `1a2` with title `Title`. Text without a leading identifier yields an
/// invalid, empty `ZettelId`.
pub fn parse(text: &str) -> ZettelId {
    let trimmed = text.trim();

    let Some(m) = ID_PREFIX_RE.find(trimmed) else {
        return ZettelId::default();
    };

    let id = m.as_str().to_string();
    let rest = trimmed[m.end()..].trim();
    let title = rest
        .strip_prefix(C::ID_TITLE_SEPARATORS)
        .unwrap_or(rest)
        .trim()
        .to_string();

    ZettelId {
        is_valid: is_valid_id(&id),
        id,
        title,
    }
}

/// Check that `id` is a complete Zettel identifier
pub fn is_valid_id(id: &str) -> bool {
    ID_FULL_RE.is_match(id)
}

/// Return the identifier prefix of `text`, or an empty string
pub(crate) fn id_prefix(text: &str) -> &str {
    ID_PREFIX_RE.find(text).map(|m| m.as_str()).unwrap_or("")
}

/// Next top-level identifier given the identifiers already in use.
///
/// Always one past the highest top-level number, so deleted IDs are never
/// handed out again.
pub fn next_top_level_id<'a, I>(existing: I) -> Result<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut max: u64 = 0;

    for id in existing {
        if !TOP_LEVEL_RE.is_match(id) {
            continue;
        }
        match id.parse::<u64>() {
            Ok(n) => max = max.max(n),
            Err(e) => log::warn!("Ignoring top-level ID '{}': {}", id, e),
        }
    }

    max.checked_add(1)
        .map(|n| n.to_string())
        .ok_or_else(|| Error::ChildSpaceExhausted { parent: String::new() })
}

/// Lowest unused child of `parent` given the identifiers already in use
pub fn next_child_id(parent: &str, existing: &HashSet<String>) -> Result<String> {
    if !is_valid_id(parent) {
        return Err(Error::InvalidParentId(parent.to_string()));
    }

    let ends_with_digit = parent
        .chars()
        .last()
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false);

    let candidate = if ends_with_digit {
        (C::FIRST_LETTER_CHILD..=C::LAST_LETTER_CHILD)
            .map(|c| format!("{}{}", parent, c))
            .find(|id| !existing.contains(id))
    } else {
        (1..=C::MAX_NUMERIC_CHILD)
            .map(|n| format!("{}{}", parent, n))
            .find(|id| !existing.contains(id))
    };

    candidate.ok_or_else(|| Error::ChildSpaceExhausted {
        parent: parent.to_string(),
    })
}

/// Generate the next identifier in the corpus under `root`.
///
/// An empty `parent` produces a new top-level ID, anything else a child of
/// `parent`.
pub fn generate_next(parent: &str, root: &Path) -> Result<String> {
    if parent.is_empty() {
        let existing = corpus::enumerate_all_ids(root);
        return next_top_level_id(&existing);
    }
    generate_child(parent, root)
}

/// Generate the lowest unused child identifier of `parent` in the corpus
pub fn generate_child(parent: &str, root: &Path) -> Result<String> {
    if !is_valid_id(parent) {
        return Err(Error::InvalidParentId(parent.to_string()));
    }

    let existing = corpus::enumerate_all_ids(root);
    let id = next_child_id(parent, &existing)?;
    log::debug!("Generated child ID {} under {} ({} IDs in corpus)", id, parent, existing.len());
    Ok(id)
}
