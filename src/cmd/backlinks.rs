//! List notes linking to a note

use std::io;

use formica::{backlinks, util, VaultContext};

pub fn run(ctx: &VaultContext, note: &str) -> io::Result<()> {
    let root = ctx.require_vault()?;
    let note_path = ctx.locate_note(note)?;

    let found = backlinks::find_backlinks(&note_path, &root);

    if ctx.json {
        return super::print_json(&found);
    }

    if found.is_empty() {
        eprintln!("No backlinks to {}", util::display_relative(&note_path, &root));
        return Ok(());
    }

    for path in &found {
        println!("{}", util::display_relative(path, &root));
    }

    Ok(())
}
