use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    /// Characters allowed to appear in a shared block prefix: quote and
    /// comment markers, list bullets, and plain indentation.
    static ref PREFIX_CHARS: HashSet<char> = [
        ' ', '>', ':', '-', '*', '|', '#', '$', '%', '"', '\'', '/',
    ]
    .iter()
    .copied()
    .collect();
}

pub fn is_prefix_char(ch: char) -> bool {
    PREFIX_CHARS.contains(&ch)
}

/// Finds the longest run of prefix-eligible characters shared by every line.
///
/// Scanning stops at the first position where line 0's character is not
/// eligible, any line is exhausted, or any line disagrees. Eligible
/// characters are all ASCII, so the returned prefix's byte length equals its
/// character count and callers can strip it by byte offset.
pub fn detect_prefix(lines: &[String]) -> String {
    let first = match lines.first() {
        Some(line) => line.as_bytes(),
        None => return String::new(),
    };
    let mut len = 0;
    'scan: for (pos, &byte) in first.iter().enumerate() {
        if !byte.is_ascii() || !is_prefix_char(byte as char) {
            break;
        }
        for line in lines {
            if line.as_bytes().get(pos) != Some(&byte) {
                break 'scan;
            }
        }
        len = pos + 1;
    }
    lines[0][..len].to_string()
}
