use clap::Parser;
use formica::{Cli, Command, VaultContext};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let ctx = VaultContext::new(cli.vault.as_deref(), cli.json);

    match cli.command {
        Command::Links { note } => cmd::links::run(&ctx, &note),
        Command::Resolve { token } => cmd::resolve::run(&ctx, &token),
        Command::Backlinks { note } => cmd::backlinks::run(&ctx, &note),
        Command::Ids { duplicates } => cmd::ids::run(&ctx, duplicates),
        Command::NextId { parent } => cmd::next_id::run(&ctx, parent.as_deref()),
        Command::Zettel { title, parent } => {
            cmd::zettel::run(&ctx, title.as_deref(), parent.as_deref())
        }
        Command::Daily => cmd::daily::run(&ctx),
        Command::Create { link } => cmd::create::run(&ctx, &link),
        Command::Search { text } => cmd::search::run(&ctx, &text),
        Command::Highlight { note } => cmd::highlight::run(&ctx, &note),
    }
}

mod cmd {
    pub mod backlinks;
    pub mod create;
    pub mod daily;
    pub mod highlight;
    pub mod ids;
    pub mod links;
    pub mod next_id;
    pub mod resolve;
    pub mod search;
    pub mod zettel;

    use std::io;

    /// Print a value as pretty JSON
    pub fn print_json<T: serde::Serialize>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        println!("{}", json);
        Ok(())
    }
}
