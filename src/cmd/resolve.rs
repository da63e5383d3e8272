//! Resolve a link token to a file path

use std::io;

use formica::{note_resolver, util, VaultContext};

pub fn run(ctx: &VaultContext, token: &str) -> io::Result<()> {
    let root = ctx.require_vault()?;

    match note_resolver::resolve_link(token, &root) {
        Some(path) => {
            if ctx.json {
                return super::print_json(&path);
            }
            println!("{}", util::display_path(&path));
            Ok(())
        }
        None => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Note '{}' not found", token),
        )),
    }
}
