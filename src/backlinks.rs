//! Backlink lookup
//!
//! A note B links back to note A when B contains a wiki link whose text is
//! A's title or Zettel ID, or which resolves to A's file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::corpus;
use crate::note_resolver;
use crate::wikilink;

/// Find every other note in the vault that links to `note_path`.
///
/// A relative `note_path` that does not exist as given is taken relative to
/// `root`. Each linking file is listed once, in traversal order. Unreadable
/// files are skipped.
pub fn find_backlinks(note_path: &Path, root: &Path) -> Vec<PathBuf> {
    let note_path = if note_path.is_relative() && !note_path.exists() {
        root.join(note_path)
    } else {
        note_path.to_path_buf()
    };

    let title = corpus::base_name(&note_path);
    let zettel_id = corpus::extract_id_from_filename(&title);
    let target = canonical(&note_path);

    // Link text -> resolved file, valid for this call only
    let mut resolved: HashMap<String, Option<PathBuf>> = HashMap::new();
    let mut backlinks = Vec::new();

    for path in corpus::list_note_files(root) {
        if canonical(&path) == target {
            continue;
        }

        let content = match corpus::read_note(&path) {
            Ok(content) => content,
            Err(e) => {
                log::debug!("Skipping unreadable note {}: {}", path.display(), e);
                continue;
            }
        };

        let links_here = wikilink::scan(&content).any(|link| {
            if link.link_text == title || (!zettel_id.is_empty() && link.link_text == zettel_id) {
                return true;
            }
            if link.link_text.is_empty() {
                return false;
            }

            let hit = resolved
                .entry(link.link_text.clone())
                .or_insert_with(|| note_resolver::resolve_link(&link.link_text, root));
            hit.as_deref().map(|p| canonical(p) == target).unwrap_or(false)
        });

        if links_here {
            backlinks.push(path);
        }
    }

    log::debug!("{} backlink(s) to {}", backlinks.len(), note_path.display());
    backlinks
}

fn canonical(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
