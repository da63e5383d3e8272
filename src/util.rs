//! Utility functions for path handling and note file names

use std::io;
use std::path::{Path, PathBuf};

use crate::constants as C;

/// Validate and resolve a note path, ensuring it stays within the vault.
/// Returns an error if the path attempts to escape the base directory.
pub fn secure_path(base: &Path, relative: &str) -> io::Result<PathBuf> {
    let mut result = base.to_path_buf();

    for component in relative.split(|c| c == '/' || c == '\\') {
        match component {
            "" | "." => continue,
            ".." => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Path traversal detected: cannot escape vault directory",
                ));
            }
            _ => {
                // Windows drive prefix such as "C:"
                if component.len() >= 2 && component.as_bytes()[1] == b':' {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "Absolute paths are not allowed",
                    ));
                }
                result.push(component);
            }
        }
    }

    if relative.starts_with('/') || relative.starts_with('\\') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Absolute paths are not allowed",
        ));
    }

    if result == base {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Empty note path",
        ));
    }

    Ok(result)
}

/// File name for a note titled `title`: spaces become underscores
pub fn note_file_name(title: &str) -> String {
    format!("{}{}", title.trim().replace(' ', "_"), C::MARKDOWN_EXTENSION)
}

/// File name for a Zettel note: `<id>.md` or `<id> <Title_words>.md`
pub fn zettel_file_name(id: &str, title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        format!("{}{}", id, C::MARKDOWN_EXTENSION)
    } else {
        format!("{} {}{}", id, title.replace(' ', "_"), C::MARKDOWN_EXTENSION)
    }
}

/// Display a path with forward slashes (cross-platform standard)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Display a path relative to the vault root when it lies inside it
pub fn display_relative(path: &Path, root: &Path) -> String {
    display_path(path.strip_prefix(root).unwrap_or(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_path_normal() {
        let base = PathBuf::from("/home/user/notes");
        let result = secure_path(&base, "folder/note.md").unwrap();
        assert_eq!(result, PathBuf::from("/home/user/notes/folder/note.md"));
    }

    #[test]
    fn test_secure_path_traversal_blocked() {
        let base = PathBuf::from("/home/user/notes");
        assert!(secure_path(&base, "../../../etc/passwd").is_err());
        assert!(secure_path(&base, "a/../../b.md").is_err());
    }

    #[test]
    fn test_secure_path_absolute_blocked() {
        let base = PathBuf::from("/home/user/notes");
        assert!(secure_path(&base, "/etc/passwd").is_err());
        assert!(secure_path(&base, "C:\\Windows\\System32").is_err());
    }

    #[test]
    fn test_secure_path_empty_blocked() {
        let base = PathBuf::from("/home/user/notes");
        assert!(secure_path(&base, "").is_err());
        assert!(secure_path(&base, "./").is_err());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(note_file_name(" My Topic "), "My_Topic.md");
        assert_eq!(zettel_file_name("1c", ""), "1c.md");
        assert_eq!(zettel_file_name("1c", "Some Idea"), "1c Some_Idea.md");
    }

    #[test]
    fn test_display_relative() {
        let root = Path::new("/vault");
        assert_eq!(display_relative(Path::new("/vault/sub/a.md"), root), "sub/a.md");
        assert_eq!(display_relative(Path::new("/elsewhere/a.md"), root), "/elsewhere/a.md");
    }
}
