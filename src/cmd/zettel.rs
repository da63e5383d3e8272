//! Create a Zettel note with a generated ID

use std::io;

use formica::{util, NoteEngine, VaultContext};

pub fn run(ctx: &VaultContext, title: Option<&str>, parent: Option<&str>) -> io::Result<()> {
    let engine = NoteEngine::new(ctx.require_vault()?);
    let path = engine.create_zettel(parent, title)?;

    // Output full path for shell pipeline compatibility
    println!("{}", util::display_path(&path));
    Ok(())
}
