//! List the wiki links of a note

use std::io;

use formica::{corpus, util, wikilink, VaultContext, WikiLink};

pub fn run(ctx: &VaultContext, note: &str) -> io::Result<()> {
    let root = ctx.require_vault()?;
    let note_path = ctx.locate_note(note)?;
    let content = corpus::read_note(&note_path)?;

    let links: Vec<WikiLink> = wikilink::scan_in(&content, &root).collect();

    if ctx.json {
        return super::print_json(&links);
    }

    for link in &links {
        let target = match link.target_file {
            Some(ref path) if link.exists => util::display_relative(path, &root),
            _ => "(missing)".to_string(),
        };
        println!("{}: [[{}]] -> {}", link.start, link.link_text, target);
    }

    Ok(())
}
