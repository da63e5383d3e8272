//! List Zettel IDs in the vault

use std::io;

use formica::{corpus, util, VaultContext};

pub fn run(ctx: &VaultContext, duplicates: bool) -> io::Result<()> {
    let root = ctx.require_vault()?;

    if duplicates {
        let dups = corpus::duplicate_ids(&root);
        if ctx.json {
            return super::print_json(&dups);
        }
        if dups.is_empty() {
            eprintln!("No duplicate IDs found.");
        }
        for (id, paths) in &dups {
            println!("{}:", id);
            for path in paths {
                println!("  {}", util::display_relative(path, &root));
            }
        }
        return Ok(());
    }

    let mut ids: Vec<String> = corpus::enumerate_all_ids(&root).into_iter().collect();
    ids.sort();

    if ctx.json {
        return super::print_json(&ids);
    }

    for id in &ids {
        println!("{}", id);
    }

    Ok(())
}
