//! Line classification for `.env` text.
//!
//! A line is trimmed, skipped when blank or a `#` comment, and otherwise
//! split on its first `=` into key and value. The value keeps any further
//! `=` characters verbatim and is never trimmed on its own.

use std::collections::HashSet;

/// Outcome of classifying one line against the keys seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Blank line or comment.
    Skip,
    /// No key before the first `=`, or no `=` at all.
    InvalidFormat,
    /// Key was already defined earlier in the same file.
    DuplicateKey { key: &'a str },
    /// First occurrence of `key` with nothing after `=`.
    EmptyValue { key: &'a str },
    /// First occurrence of `key` with a non-empty value.
    Valid { key: &'a str, value: &'a str },
}

impl<'a> Classification<'a> {
    /// Key that becomes "seen" after this line, if any.
    ///
    /// Duplicates are already seen and malformed lines never are.
    pub fn newly_seen(&self) -> Option<&'a str> {
        match *self {
            Classification::EmptyValue { key } | Classification::Valid { key, .. } => Some(key),
            Classification::Skip
            | Classification::InvalidFormat
            | Classification::DuplicateKey { .. } => None,
        }
    }
}

/// Split a trimmed line on its first `=`.
///
/// Returns `None` when there is no `=` or the key segment is empty.
pub fn split_entry(trimmed: &str) -> Option<(&str, &str)> {
    match trimmed.split_once('=') {
        Some((key, value)) if !key.is_empty() => Some((key, value)),
        _ => None,
    }
}

/// Whether a line carries no definition (blank or `#` comment).
pub fn is_skippable(line: &str) -> bool {
    let t = line.trim();
    t.is_empty() || t.starts_with('#')
}

/// Classify `line` given the keys already defined in the current file.
///
/// Does not mutate `seen`; the caller inserts [`Classification::newly_seen`].
pub fn classify<'a>(line: &'a str, seen: &HashSet<&str>) -> Classification<'a> {
    if is_skippable(line) {
        return Classification::Skip;
    }
    let Some((key, value)) = split_entry(line.trim()) else {
        return Classification::InvalidFormat;
    };
    if seen.contains(key) {
        return Classification::DuplicateKey { key };
    }
    if value.is_empty() {
        Classification::EmptyValue { key }
    } else {
        Classification::Valid { key, value }
    }
}
