//! Print highlight spans of a note

use std::io;

use formica::{corpus, highlight, VaultContext};

pub fn run(ctx: &VaultContext, note: &str) -> io::Result<()> {
    let note_path = ctx.locate_note(note)?;
    let content = corpus::read_note(&note_path)?;
    let spans = highlight::highlight(&content);

    if ctx.json {
        return super::print_json(&spans);
    }

    for span in &spans {
        let text = content.get(span.start..span.start + span.len).unwrap_or("");
        println!("{}+{} {:?}: {}", span.start, span.len, span.style, text);
    }
    Ok(())
}
