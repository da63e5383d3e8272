//! Search note contents

use std::io;

use formica::{search, util, VaultContext};

pub fn run(ctx: &VaultContext, text: &str) -> io::Result<()> {
    let root = ctx.require_vault()?;
    let hits = search::search(&root, text);

    if ctx.json {
        return super::print_json(&hits);
    }

    if hits.is_empty() {
        eprintln!("No results found for '{}'", text.trim());
        return Ok(());
    }

    for hit in &hits {
        println!("{}:{}: {}", util::display_relative(&hit.path, &root), hit.line_number, hit.line);
    }
    eprintln!("Found {} results", hits.len());
    Ok(())
}
