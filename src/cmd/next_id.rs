//! Print the next free Zettel ID

use std::io;

use formica::{zettel, VaultContext};

pub fn run(ctx: &VaultContext, parent: Option<&str>) -> io::Result<()> {
    let root = ctx.require_vault()?;
    let id = zettel::generate_next(parent.unwrap_or(""), &root)?;

    if ctx.json {
        return super::print_json(&id);
    }
    println!("{}", id);
    Ok(())
}
