//! Constants for formica
//!
//! File extensions, identifier budgets, note templates and format strings
//! shared by the engine and the command modules.

// === Corpus ===

/// Extensions (lowercase, without dot) of files that count as notes
pub const NOTE_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// Extension used for newly created notes
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Markdown heading marker
pub const HEADING_MARKER: char = '#';

// === Zettel Identifiers ===

/// Separators allowed between a Zettel ID and its title
pub const ID_TITLE_SEPARATORS: &[char] = &['-', ':'];

/// Highest numeric suffix tried when branching below an alphabetic ID
pub const MAX_NUMERIC_CHILD: u32 = 999;

/// Lowest and highest letter suffix tried when branching below a numeric ID
pub const FIRST_LETTER_CHILD: char = 'a';
pub const LAST_LETTER_CHILD: char = 'z';

// === Wiki Links ===

/// Separator between link target and display text: [[target|display]]
pub const LINK_ALIAS_SEPARATOR: char = '|';

// === Daily Notes ===

/// Date format for daily note filenames: YYYY-MM-DD
pub const DAILY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Daily note body template, argument: date
pub const DAILY_NOTE_TEMPLATE: &str = "# Daily Note - {date}\n\n## Today\n\n## Tomorrow\n\n## Notes\n\n";

// === Configuration ===

/// Default vault directory (inside the user's home directory)
pub const DEFAULT_VAULT_DIR: &str = ".formica-notes";

/// Environment variable overriding the vault path
pub const ENV_VAULT: &str = "FORMICA_VAULT";
