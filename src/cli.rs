use clap::{Parser, Subcommand};

/// formica - wiki links and Zettelkasten numbering for a folder of notes
///
/// ## Notes and identifiers
///
/// ```bash
/// formica zettel "First idea"          # Create 1 First_idea.md
/// formica zettel --parent 1 "Branch"   # Create 1a Branch.md
/// formica next-id 1a                   # Print the next child of 1a
/// formica ids --duplicates             # IDs claimed by several notes
/// formica daily                        # Open or create YYYY-MM-DD.md
/// ```
///
/// ## Links
///
/// ```bash
/// formica links "1 Intro.md"      # Wiki links in a note and their targets
/// formica resolve 1a              # Path of the note a link points to
/// formica backlinks Conclusion    # Notes linking to Conclusion
/// formica create "New Topic"      # Create the note for a dangling link
/// ```
///
/// ## Environment Variables
///
/// - `FORMICA_VAULT`: vault directory (default: ~/.formica-notes)
/// - `RUST_LOG`: log level (e.g. `debug`)
#[derive(Parser, Debug)]
#[command(name = "formica")]
#[command(version)]
#[command(about = "Wiki-link and Zettelkasten identifier engine for plain-text notes")]
pub struct Cli {
    /// Vault directory (default: $FORMICA_VAULT or ~/.formica-notes)
    #[arg(long, value_name = "PATH", global = true)]
    pub vault: Option<String>,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the wiki links of a note with their resolved targets
    #[command(alias = "ls")]
    Links {
        /// Note path or link token
        note: String,
    },

    /// Resolve a link token (Zettel ID first, then title) to a file path
    #[command(alias = "rv")]
    Resolve {
        /// Zettel ID or title
        token: String,
    },

    /// List notes linking to a note
    #[command(alias = "bl")]
    Backlinks {
        /// Note path or link token
        note: String,
    },

    /// List all Zettel IDs in the vault
    Ids {
        /// Only show IDs claimed by more than one note
        #[arg(long)]
        duplicates: bool,
    },

    /// Print the next free Zettel ID
    NextId {
        /// Parent ID (omit for a new top-level ID)
        parent: Option<String>,
    },

    /// Create a Zettel note with a generated ID
    #[command(alias = "z")]
    Zettel {
        /// Optional title
        title: Option<String>,

        /// Create as a child of this ID
        #[arg(short, long)]
        parent: Option<String>,
    },

    /// Open or create today's daily note
    ///
    /// Daily notes are named YYYY-MM-DD.md. The leading year counts as a
    /// top-level Zettel ID, so new top-level notes are numbered above it.
    Daily,

    /// Create the note a dangling link points to
    Create {
        /// Link token (Zettel ID with optional title, or a title)
        link: String,
    },

    /// Search note contents (case-insensitive)
    #[command(alias = "s")]
    Search {
        /// Text to look for
        text: String,
    },

    /// Print highlight spans of a note
    Highlight {
        /// Note path or link token
        note: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_daily_help_mentions_id_side_effect() {
        let cmd = Cli::command();
        let daily = cmd.find_subcommand("daily").unwrap();
        let help = daily.get_long_about().unwrap().to_string();
        assert!(help.contains("top-level Zettel ID"));
    }

    #[test]
    fn test_parse_zettel_with_parent() {
        let cli = Cli::try_parse_from(["formica", "--json", "z", "-p", "1a", "Idea"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Zettel { title, parent } => {
                assert_eq!(title.as_deref(), Some("Idea"));
                assert_eq!(parent.as_deref(), Some("1a"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
