//! Highlighting of query terms inside a text field.
//!
//! Spans are character offsets into the original text. For every term, in query order, every
//! occurrence is found (case-insensitively, resuming the scan after the previous occurrence); an
//! occurrence overlapping an already accepted span is dropped, so the first term and the first
//! occurrence win. Touching spans are not merged.

use serde::Serialize;

use crate::fixture::{Match, MatchField};
use crate::query::Query;

/// Half-open `[start, end)` range of characters to highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HighlightSpan {
    /// First highlighted character
    pub start: usize,
    /// One past the last highlighted character
    pub end: usize,
}

impl HighlightSpan {
    /// Creates a span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// True if the two spans share at least one character
    pub fn overlaps(&self, other: &HighlightSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True for a span covering nothing
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Lower-cases `text` the way the filter does, remembering which original character every
/// lower-cased character came from (lower-casing can change the character count).
fn lowercase_with_char_mapping(text: &str) -> (Vec<char>, Vec<usize>) {
    let lowered: Vec<char> = text.to_lowercase().chars().collect();
    let mapping: Vec<usize> = text
        .chars()
        .enumerate()
        .flat_map(|(index, ch)| std::iter::repeat_n(index, ch.to_lowercase().count()))
        .collect();
    if lowered.len() == mapping.len() {
        return (lowered, mapping);
    }

    // context-sensitive lowering changed a length, map one character at a time instead
    let capacity = mapping.len();
    let mut lowered = Vec::with_capacity(capacity);
    let mut mapping = Vec::with_capacity(capacity);
    for (index, ch) in text.chars().enumerate() {
        for lower in ch.to_lowercase() {
            lowered.push(lower);
            mapping.push(index);
        }
    }
    (lowered, mapping)
}

fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Computes the highlighted spans of `query` in `text`, sorted by start
pub fn highlight_spans(text: &str, query: &Query) -> Vec<HighlightSpan> {
    if text.is_empty() || query.is_empty() {
        return Vec::new();
    }

    let (lowered, mapping) = lowercase_with_char_mapping(text);
    let mut accepted: Vec<HighlightSpan> = Vec::new();

    for term in query.terms() {
        let needle: Vec<char> = term.chars().collect();
        let mut position = 0;
        while let Some(found) = find_from(&lowered, &needle, position) {
            let end = found + needle.len();
            let span = HighlightSpan::new(mapping[found], mapping[end - 1] + 1);
            if accepted.iter().any(|s| s.overlaps(&span)) {
                trace!("highlight: dropping {span:?} of `{term}`, overlaps an earlier span");
            } else {
                accepted.push(span);
            }
            position = end;
        }
    }

    accepted.sort();
    accepted
}

/// Wraps every span of `text` in `open`/`close`.
///
/// Markup is inserted from the last span to the first, so an insertion never shifts the offsets
/// of a span that is still to be applied.
pub fn annotate(text: &str, spans: &[HighlightSpan], open: &str, close: &str) -> String {
    let boundaries: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
    let byte_at = |char_index: usize| boundaries.get(char_index).copied().unwrap_or(text.len());

    let mut descending = spans.to_vec();
    descending.sort_by(|a, b| b.start.cmp(&a.start));

    let mut annotated = text.to_string();
    for span in descending {
        annotated.insert_str(byte_at(span.end), close);
        annotated.insert_str(byte_at(span.start), open);
    }
    annotated
}

//------------------------------------------------------------------------------
/// A run of text, either highlighted or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The text of the run
    pub text: &'a str,
    /// Whether the run is highlighted
    pub highlighted: bool,
}

/// A text together with its highlighted spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted<'a> {
    text: &'a str,
    spans: Vec<HighlightSpan>,
}

impl<'a> Highlighted<'a> {
    /// Highlights `query` in `text`
    pub fn new(text: &'a str, query: &Query) -> Self {
        Self {
            text,
            spans: highlight_spans(text, query),
        }
    }

    /// Highlights `query` in one field of `record`; an absent field highlights as empty text
    pub fn field(record: &'a Match, field: MatchField, query: &Query) -> Self {
        Self::new(field.value(record).unwrap_or_default(), query)
    }

    /// The underlying text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The spans, sorted by start
    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    /// See [`annotate`]
    pub fn annotate(&self, open: &str, close: &str) -> String {
        annotate(self.text, &self.spans, open, close)
    }

    /// Splits the text into alternating plain and highlighted runs, skipping empty runs
    pub fn segments(&self) -> Vec<Segment<'a>> {
        let boundaries: Vec<usize> = self.text.char_indices().map(|(byte, _)| byte).collect();
        let byte_at = |char_index: usize| boundaries.get(char_index).copied().unwrap_or(self.text.len());

        let mut segments = Vec::new();
        let mut push = |text: &'a str, highlighted: bool| {
            if !text.is_empty() {
                segments.push(Segment { text, highlighted });
            }
        };

        let mut cursor = 0;
        for span in &self.spans {
            let (start, end) = (byte_at(span.start), byte_at(span.end));
            push(&self.text[cursor..start], false);
            push(&self.text[start..end], true);
            cursor = end;
        }
        push(&self.text[cursor..], false);
        segments
    }
}
