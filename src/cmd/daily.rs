//! Daily note command module

use std::io;

use formica::{util, DailyNote, NoteEngine, VaultContext};

pub fn run(ctx: &VaultContext) -> io::Result<()> {
    let engine = NoteEngine::new(ctx.require_vault()?);
    let note = engine.daily_note()?;

    if let DailyNote::Created(_) = note {
        eprintln!("Created daily note");
    }
    println!("{}", util::display_path(note.path()));
    Ok(())
}
