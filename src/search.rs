//! Plain text search across a vault

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::corpus;

/// A line containing the search text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub path: PathBuf,
    /// 1-based line number
    pub line_number: usize,
    /// The matching line, trimmed
    pub line: String,
}

/// Case-insensitive substring search over every note under `root`.
///
/// Hits come in traversal order, then line order. No ranking.
pub fn search(root: &Path, needle: &str) -> Vec<SearchHit> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();

    for path in corpus::list_note_files(root) {
        let content = match corpus::read_note(&path) {
            Ok(content) => content,
            Err(e) => {
                log::debug!("Skipping unreadable note {}: {}", path.display(), e);
                continue;
            }
        };

        for (index, line) in content.lines().enumerate() {
            if line.to_lowercase().contains(&needle) {
                hits.push(SearchHit {
                    path: path.clone(),
                    line_number: index + 1,
                    line: line.trim().to_string(),
                });
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_search_case_insensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "first\n  The Rust book  \nthird rust").unwrap();
        fs::write(dir.path().join("b.txt"), "nothing here").unwrap();
        fs::write(dir.path().join("c.png"), "rust").unwrap();

        let hits = search(dir.path(), "RUST");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].line_number, 2);
        assert_eq!(hits[0].line, "The Rust book");
        assert_eq!(hits[1].line_number, 3);
        assert!(hits.iter().all(|h| h.path == dir.path().join("a.md")));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_entries_are_skipped() {
        use std::os::unix::fs::{symlink, PermissionsExt};

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "rust one").unwrap();
        symlink(dir.path().join("gone.md"), dir.path().join("b.md")).unwrap();
        let locked = dir.path().join("c.md");
        fs::write(&locked, "rust locked").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        fs::write(dir.path().join("d.md"), "rust two").unwrap();

        // Permission bits do not stop root from reading
        let readable = fs::File::open(&locked).is_ok();
        let hits = search(dir.path(), "rust");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

        let lines: Vec<&str> = hits.iter().map(|h| h.line.as_str()).collect();
        if readable {
            assert_eq!(lines, vec!["rust one", "rust locked", "rust two"]);
        } else {
            assert_eq!(lines, vec!["rust one", "rust two"]);
        }
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), b"caf\xe9\nrust here\n").unwrap();

        let hits = search(dir.path(), "rust");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line_number, 2);
    }

    #[test]
    fn test_empty_needle() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "text").unwrap();
        assert!(search(dir.path(), "   ").is_empty());
    }
}
