//! Locating corpus phrases in posting text

use serde::Serialize;

use crate::corpus;

/// Byte range of a matched phrase in the original text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
    /// Corpus phrase that matched
    pub phrase: &'static str,
}

/// Spans of every corpus phrase in `text`, ordered by position
///
/// Matching ignores ASCII case so offsets stay valid for the original text.
/// Where phrases overlap the longest one is kept.
pub fn highlight(text: &str) -> Vec<Highlight> {
    let lowered = text.to_ascii_lowercase();

    let mut phrases: Vec<&'static str> = corpus::all_phrases().collect();
    phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    phrases.dedup();

    let mut spans: Vec<Highlight> = Vec::new();
    for phrase in phrases {
        for (start, _) in lowered.match_indices(phrase) {
            let end = start + phrase.len();
            let overlaps = spans.iter().any(|s| start < s.end && s.start < end);
            if !overlaps {
                spans.push(Highlight { start, end, phrase });
            }
        }
    }

    spans.sort_by_key(|s| s.start);
    spans
}

/// Wrap every highlighted span of `text` in the given markers
pub fn mark(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in highlight(text) {
        out.push_str(&text[cursor..span.start]);
        out.push_str(open);
        out.push_str(&text[span.start..span.end]);
        out.push_str(close);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
