//! Fraction normalization and fixed-width word wrapping.
//!
//! Thermal printers using code page 437 have no glyphs for the Unicode
//! vulgar fractions recipe sites love, so those are substituted with plain
//! ASCII before any width calculation happens.

/// Unicode vulgar fractions and their ASCII replacements.
const FRACTIONS: [(&str, &str); 18] = [
    ("\u{00bd}", "1/2"),
    ("\u{00bc}", "1/4"),
    ("\u{00be}", "3/4"),
    ("\u{2150}", "1/7"),
    ("\u{2151}", "1/9"),
    ("\u{2152}", "1/10"),
    ("\u{2153}", "1/3"),
    ("\u{2154}", "2/3"),
    ("\u{2155}", "1/5"),
    ("\u{2156}", "2/5"),
    ("\u{2157}", "3/5"),
    ("\u{2158}", "4/5"),
    ("\u{2159}", "1/6"),
    ("\u{215a}", "5/6"),
    ("\u{215b}", "1/8"),
    ("\u{215c}", "3/8"),
    ("\u{215d}", "5/8"),
    ("\u{215e}", "7/8"),
];

/// Replaces Unicode fraction characters with their ASCII counterparts.
/// Unmapped characters pass through unchanged; the substitution is idempotent
/// since no replacement text contains a mapped code point.
pub fn normalize_fractions(text: &str) -> String {
    let mut out = text.to_string();
    for (unicode_frac, ascii_frac) in FRACTIONS {
        if out.contains(unicode_frac) {
            out = out.replace(unicode_frac, ascii_frac);
        }
    }
    out
}

/// Wraps text to `width` columns, preserving existing newlines.
///
/// Each source line is wrapped independently; text is never re-flowed across
/// an explicit newline. Blank source lines come through as blank output lines
/// so paragraph spacing survives. `indent` is applied to the first and all
/// continuation lines alike and counts against `width`.
pub fn wrap(text: &str, width: usize, indent: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = normalize_fractions(text);
    let mut wrapped = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            wrapped.push(String::new());
            continue;
        }
        wrapped.push(fill(line, width, indent));
    }
    wrapped.join("\n")
}

/// Greedy word wrap of a single newline-free line. Breaks only at whitespace;
/// a word wider than the available columns gets its own over-long line.
fn fill(line: &str, width: usize, indent: &str) -> String {
    let available = width.saturating_sub(indent.chars().count()).max(1);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= available {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(format!("{indent}{current}"));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(format!("{indent}{current}"));
    }
    lines.join("\n")
}
