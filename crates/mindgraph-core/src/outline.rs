//! Line grammar for indented dash outlines.
//!
//! A line is a list item iff it matches `^( *)-\s+(.+)$`. Indentation counts spaces only; two
//! spaces make one level. Anything else (blank lines, prose, tab-indented lines) is skipped.

use regex::Regex;

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

fn list_item_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^( *)-\s+(.+)$").expect("valid regex"))
}

/// One list item of an outline, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineItem<'a> {
    /// Zero-based physical line number.
    pub line: usize,
    pub indent: usize,
    pub depth: usize,
    pub label: &'a str,
}

/// Matches a single physical line against the list-item grammar.
///
/// Returns the indentation width and the trimmed label. Items whose label is blank after trimming
/// are not list items.
pub fn parse_line(line: &str) -> Option<(usize, &str)> {
    let caps = list_item_regex().captures(line)?;
    let indent = caps.get(1).map_or(0, |m| m.as_str().len());
    let label = caps.get(2)?.as_str().trim();
    if label.is_empty() {
        return None;
    }
    Some((indent, label))
}

/// Iterates the list items of `text` in source order.
pub fn items(text: &str) -> impl Iterator<Item = OutlineItem<'_>> {
    text.lines().enumerate().filter_map(|(line, raw)| {
        if raw.trim().is_empty() {
            return None;
        }
        let Some((indent, label)) = parse_line(raw) else {
            tracing::trace!(line, "skipping non-list line");
            return None;
        };
        Some(OutlineItem {
            line,
            indent,
            depth: indent / INDENT_WIDTH,
            label,
        })
    })
}

/// Flat list of item labels in source order. Hierarchy is ignored and duplicates are kept.
pub fn extract_labels(text: &str) -> Vec<String> {
    items(text).map(|item| item.label.to_string()).collect()
}
