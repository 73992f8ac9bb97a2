//! Markdown-lite parsing of free-form to-do text.
//!
//! Supported constructs: `#`/`##`/`###` headers, `- [ ]` and `* [x]` style
//! tasks, `1.` ordered-list tasks, full-line `**bold**`/`__bold__`, and plain
//! `-`/`*` bullets. Everything else is a plain line. Blank lines are dropped.

use crate::model::{Item, ItemKind};

const CHECKBOX_MARKERS: [&str; 4] = ["- [ ]", "* [ ]", "- [x]", "* [x]"];
const BOLD_MARKERS: [&str; 2] = ["**", "__"];

/// Parses markdown-like text into structured to-do items.
///
/// Classification is strictly line-by-line and infallible; empty input yields
/// an empty vec, which callers treat as "nothing to print". Checked tasks are
/// accepted but their state is dropped: everything prints as an empty
/// checkbox.
pub fn parse_todo_text(raw: &str) -> Vec<Item> {
    raw.split('\n').filter_map(classify_line).collect()
}

fn classify_line(line: &str) -> Option<Item> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if line.starts_with('#') {
        let level = line.chars().take_while(|c| *c == '#').count();
        let kind = match level {
            1 => ItemKind::HeaderL1,
            2 => ItemKind::HeaderL2,
            _ => ItemKind::HeaderL3,
        };
        return Some(Item::new(kind, line.trim_start_matches('#').trim()));
    }

    for marker in CHECKBOX_MARKERS {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(Item::new(ItemKind::Task, strip_inline_bold(rest.trim())));
        }
    }

    if let Some(rest) = strip_ordered_prefix(line) {
        return Some(Item::new(ItemKind::Task, strip_inline_bold(rest.trim())));
    }

    for marker in BOLD_MARKERS {
        if line.len() >= 2 * marker.len() && line.starts_with(marker) && line.ends_with(marker) {
            let inner = &line[marker.len()..line.len() - marker.len()];
            return Some(Item::new(ItemKind::Bold, inner.trim()));
        }
    }

    if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('*')) {
        return Some(Item::new(ItemKind::Task, strip_inline_bold(rest.trim())));
    }

    Some(Item::new(ItemKind::Plain, strip_inline_bold(line)))
}

/// Strips an ordered-list prefix ("1. ", "12.\t" ...), returning the rest.
fn strip_ordered_prefix(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

/// Replaces every paired `**X**` or `__X__` within a line with bare `X`.
/// Unpaired markers are left alone.
fn strip_inline_bold(text: &str) -> String {
    let mut out = strip_paired_marker(text, "**");
    out = strip_paired_marker(&out, "__");
    out
}

fn strip_paired_marker(text: &str, marker: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(marker) {
        let after = start + marker.len();
        match rest[after..].find(marker) {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push_str(&rest[after..after + end]);
                rest = &rest[after + end + marker.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
