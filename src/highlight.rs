//! Highlight spans for note text
//!
//! Produces styled byte ranges an editor can paint. Knows nothing about any
//! widget toolkit.

use serde::Serialize;

use crate::constants as C;
use crate::wikilink;
use crate::zettel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Heading,
    WikiLink,
    ZettelId,
}

/// A styled byte range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub start: usize,
    pub len: usize,
    pub style: Style,
}

/// Compute highlight spans for `text`, sorted by start offset
pub fn highlight(text: &str) -> Vec<Highlight> {
    let mut spans = Vec::new();

    let mut offset = 0;
    for (index, line) in text.split_inclusive('\n').enumerate() {
        let content = line.trim_end_matches(&['\r', '\n'][..]);

        if content.starts_with(C::HEADING_MARKER) {
            spans.push(Highlight { start: offset, len: content.len(), style: Style::Heading });
        } else if index == 0 {
            // Leading whitespace is allowed before an ID
            let indent = content.len() - content.trim_start().len();
            let id = zettel::id_prefix(&content[indent..]);
            if !id.is_empty() {
                spans.push(Highlight { start: offset + indent, len: id.len(), style: Style::ZettelId });
            }
        }

        offset += line.len();
    }

    spans.extend(wikilink::scan(text).map(|link| Highlight {
        start: link.start,
        len: link.len,
        style: Style::WikiLink,
    }));

    spans.sort_by_key(|span| (span.start, span.len));
    spans
}
