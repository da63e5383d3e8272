//! Create the note a dangling link points to

use std::io;

use formica::{note_resolver, util, NoteEngine, VaultContext};

pub fn run(ctx: &VaultContext, link: &str) -> io::Result<()> {
    let root = ctx.require_vault()?;

    if let Some(existing) = note_resolver::resolve_link(link.trim(), &root) {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("'{}' already resolves to {}", link, util::display_path(&existing)),
        ));
    }

    let engine = NoteEngine::new(root);
    let path = engine.create_for_link(link)?;
    println!("{}", util::display_path(&path));
    Ok(())
}
