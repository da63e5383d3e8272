//! Vault context
//!
//! Resolves which directory is the vault and how output is formatted. Built
//! once in `main` and passed to every command.
//!
//! Vault path priority:
//! 1. `--vault` flag
//! 2. `FORMICA_VAULT` environment variable
//! 3. `~/.formica-notes`

use std::io;
use std::path::{Path, PathBuf};

use crate::constants as C;
use crate::note_resolver;

/// Settings shared by all commands
#[derive(Debug, Clone)]
pub struct VaultContext {
    /// The vault root directory
    pub vault: PathBuf,
    /// Whether to output in JSON format
    pub json: bool,
}

impl VaultContext {
    /// Create a context from the command line flags
    pub fn new(vault: Option<&str>, json: bool) -> Self {
        Self {
            vault: vault_path(vault),
            json,
        }
    }

    /// The vault root, which must be an existing directory
    pub fn require_vault(&self) -> io::Result<PathBuf> {
        if !self.vault.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Vault directory not found: {}", self.vault.display()),
            ));
        }
        Ok(dunce::canonicalize(&self.vault).unwrap_or_else(|_| self.vault.clone()))
    }

    /// Locate a note given on the command line.
    ///
    /// Accepts a path (absolute, relative to the working directory, or
    /// relative to the vault) or a link token resolved by ID, then title.
    pub fn locate_note(&self, reference: &str) -> io::Result<PathBuf> {
        let root = self.require_vault()?;

        let as_given = Path::new(reference);
        if as_given.is_file() {
            return Ok(dunce::canonicalize(as_given).unwrap_or_else(|_| as_given.to_path_buf()));
        }

        let in_vault = root.join(reference);
        if in_vault.is_file() {
            return Ok(in_vault);
        }

        note_resolver::resolve_link(reference, &root).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Note '{}' not found", reference),
            )
        })
    }
}

/// Resolve the vault directory from an optional flag value
pub fn vault_path(flag: Option<&str>) -> PathBuf {
    if let Some(path) = flag.filter(|s| !s.is_empty()) {
        return PathBuf::from(path);
    }

    if let Some(path) = std::env::var(C::ENV_VAULT).ok().filter(|s| !s.is_empty()) {
        return PathBuf::from(path);
    }

    default_vault_path().unwrap_or_else(|| PathBuf::from("."))
}

/// Default vault directory in the user's home directory
pub fn default_vault_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(C::DEFAULT_VAULT_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_vault_path_priority() {
        // Priority 1: flag
        std::env::set_var(C::ENV_VAULT, "/from/env");
        assert_eq!(vault_path(Some("/from/flag")), PathBuf::from("/from/flag"));

        // Priority 2: environment
        assert_eq!(vault_path(None), PathBuf::from("/from/env"));
        assert_eq!(vault_path(Some("")), PathBuf::from("/from/env"));

        // Priority 3: home directory
        std::env::remove_var(C::ENV_VAULT);
        if let Some(default) = default_vault_path() {
            assert_eq!(vault_path(None), default);
        }
    }

    #[test]
    fn test_require_vault_missing() {
        let ctx = VaultContext {
            vault: PathBuf::from("/definitely/not/a/vault"),
            json: false,
        };
        let err = ctx.require_vault().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_locate_note() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/3 Three.md"), "").unwrap();
        fs::write(dir.path().join("Ideas.md"), "").unwrap();

        let ctx = VaultContext {
            vault: dir.path().to_path_buf(),
            json: false,
        };
        let root = ctx.require_vault().unwrap();

        assert_eq!(ctx.locate_note("sub/3 Three.md").unwrap(), root.join("sub/3 Three.md"));
        assert_eq!(ctx.locate_note("3").unwrap(), root.join("sub/3 Three.md"));
        assert_eq!(ctx.locate_note("ideas").unwrap(), root.join("Ideas.md"));
        assert_eq!(
            ctx.locate_note("nope").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}
