//! Domain-vocabulary highlighting for fallback paragraphs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::Span;

// Multi-word terms come first: the regex engine picks the first matching
// alternative, and "Crime Research" must win over "crime".
static VOCABULARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(Dubai Police|Crime Research|arrest|gang|begging|fraud|crime|investigation|Ramadan|Eid|Assistant)\b",
    )
    .expect("vocabulary regex")
});

/// Split `text` into spans, marking whole-word vocabulary matches as
/// highlighted. Matched text keeps its original casing; everything else
/// passes through unchanged. Always returns at least one span.
pub fn highlight_terms(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for m in VOCABULARY.find_iter(text) {
        if m.start() > last {
            spans.push(Span::plain(&text[last..m.start()]));
        }
        spans.push(Span::highlighted(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        spans.push(Span::plain(&text[last..]));
    }

    if spans.is_empty() {
        spans.push(Span::plain(text));
    }
    spans
}
