//! Note resolution module
//!
//! Resolves link tokens to note files in a vault.
//!
//! Resolution rules (in order):
//! 1. Zettel ID → file named `<id>` or `<id> <title>`, or whose first line starts with `<id>`
//! 2. Title → file whose base name or first-line heading normalizes to the token
//!
//! The first file found in traversal order wins.

use std::path::{Path, PathBuf};

use crate::corpus;
use crate::zettel;

/// Resolve a link token: by Zettel ID first, then by title
pub fn resolve_link(token: &str, root: &Path) -> Option<PathBuf> {
    resolve_by_id(token, root).or_else(|| resolve_by_title(token, root))
}

/// Resolve a Zettel ID to the note carrying it.
///
/// Tokens that are not Zettel IDs never match, whatever the file names are.
pub fn resolve_by_id(token: &str, root: &Path) -> Option<PathBuf> {
    if !zettel::is_valid_id(token) {
        return None;
    }

    let prefix = format!("{} ", token);

    corpus::notes(root)
        .find(|note| {
            if note.base_name == token || note.base_name.starts_with(&prefix) {
                return true;
            }

            let parsed = zettel::parse(&note.first_line());
            parsed.is_valid && parsed.id == token
        })
        .map(|note| note.path)
}

/// Resolve a title to the note with a matching file name or heading
pub fn resolve_by_title(token: &str, root: &Path) -> Option<PathBuf> {
    let wanted = normalize_title(token);

    corpus::notes(root)
        .find(|note| {
            if normalize_title(&note.base_name) == wanted {
                return true;
            }

            corpus::heading_text(&note.first_line())
                .map(|heading| normalize_title(heading) == wanted)
                .unwrap_or(false)
        })
        .map(|note| note.path)
}

/// Normalize a title for comparison: trimmed, lowercase, spaces as underscores
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn vault(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        dir
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  My Great Note "), "my_great_note");
        assert_eq!(normalize_title("my_great_note"), "my_great_note");
    }

    #[test]
    fn test_resolve_by_id_filename() {
        let dir = vault(&[("1 Intro.md", ""), ("1a Details.md", ""), ("1a1.txt", "")]);

        assert_eq!(resolve_by_id("1", dir.path()), Some(dir.path().join("1 Intro.md")));
        assert_eq!(resolve_by_id("1a", dir.path()), Some(dir.path().join("1a Details.md")));
        assert_eq!(resolve_by_id("1a1", dir.path()), Some(dir.path().join("1a1.txt")));
        assert_eq!(resolve_by_id("2", dir.path()), None);
    }

    #[test]
    fn test_resolve_by_id_first_line() {
        let dir = vault(&[("notes/thought.md", "  3b - A thought\n\nbody")]);
        assert_eq!(
            resolve_by_id("3b", dir.path()),
            Some(dir.path().join("notes/thought.md"))
        );
        assert_eq!(resolve_by_id("3", dir.path()), None);
    }

    #[test]
    fn test_resolve_by_id_prefix_needs_space() {
        let dir = vault(&[("1a-dash.md", ""), ("12 Twelve.md", "")]);
        assert_eq!(resolve_by_id("1", dir.path()), None);
        assert_eq!(resolve_by_id("1a", dir.path()), None);
    }

    #[test]
    fn test_resolve_by_id_rejects_titles() {
        let dir = vault(&[("Hello.md", "Hello\n"), ("hello world.md", "")]);
        assert_eq!(resolve_by_id("Hello", dir.path()), None);
        assert_eq!(resolve_by_id("", dir.path()), None);
    }

    #[test]
    fn test_resolve_by_title() {
        let dir = vault(&[
            ("Conclusion.md", ""),
            ("deep/My_Topic.txt", ""),
            ("abc.md", "## Project Plan\n"),
        ]);

        assert_eq!(
            resolve_by_title("conclusion", dir.path()),
            Some(dir.path().join("Conclusion.md"))
        );
        assert_eq!(
            resolve_by_title(" My Topic ", dir.path()),
            Some(dir.path().join("deep/My_Topic.txt"))
        );
        assert_eq!(
            resolve_by_title("project plan", dir.path()),
            Some(dir.path().join("abc.md"))
        );
        assert_eq!(resolve_by_title("nothing", dir.path()), None);
    }

    #[test]
    fn test_first_match_in_sorted_order() {
        let dir = vault(&[("b/Topic.md", ""), ("a/Topic.md", "")]);
        assert_eq!(
            resolve_by_title("topic", dir.path()),
            Some(dir.path().join("a/Topic.md"))
        );
    }

    #[test]
    fn test_resolve_link_prefers_id() {
        let dir = vault(&[("2.md", "# Something\n"), ("zz.md", "# 2\n")]);
        assert_eq!(resolve_link("2", dir.path()), Some(dir.path().join("2.md")));

        let dir = vault(&[("Ideas.md", "")]);
        assert_eq!(resolve_link("ideas", dir.path()), Some(dir.path().join("Ideas.md")));
    }
}
