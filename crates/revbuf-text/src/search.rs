#![forbid(unsafe_code)]

//! Literal substring search addressed by character index.
//!
//! All positions taken and returned here are `char` indices into the
//! haystack, never byte offsets. Matching is exact (no normalization, no
//! case folding).
//!
//! # Example
//! ```
//! use revbuf_text::search::{find_from, rfind_from};
//!
//! assert_eq!(find_from("héllo héllo", "llo", 0), Some(2));
//! assert_eq!(find_from("héllo héllo", "llo", 3), Some(8));
//! assert_eq!(rfind_from("héllo héllo", "llo", 7), Some(2));
//! ```

/// Byte offset of the `char_idx`-th character, or `haystack.len()` when the
/// index is at or past the end.
#[must_use]
pub fn char_to_byte(haystack: &str, char_idx: usize) -> usize {
    haystack
        .char_indices()
        .nth(char_idx)
        .map_or(haystack.len(), |(byte, _)| byte)
}

/// Char index of the character starting at `byte_idx`.
///
/// `byte_idx` must lie on a char boundary.
#[must_use]
pub fn byte_to_char(haystack: &str, byte_idx: usize) -> usize {
    haystack[..byte_idx].chars().count()
}

/// Smallest char index `k >= from` at which `needle` occurs.
///
/// An empty needle matches at `min(from, len)`. A `from` past the end finds
/// nothing else.
#[must_use]
pub fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let len = haystack.chars().count();
    if needle.is_empty() {
        return Some(from.min(len));
    }
    if from > len {
        return None;
    }
    let start_byte = char_to_byte(haystack, from);
    haystack[start_byte..]
        .find(needle)
        .map(|pos| from + byte_to_char(&haystack[start_byte..], pos))
}

/// Largest char index `k <= from` at which `needle` occurs.
///
/// An empty needle matches at `min(from, len)`.
#[must_use]
pub fn rfind_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let len = haystack.chars().count();
    if needle.is_empty() {
        return Some(from.min(len));
    }
    let needle_len = needle.chars().count();
    let last_start = len.checked_sub(needle_len)?;
    let end_byte = char_to_byte(haystack, from.min(last_start) + needle_len);
    haystack[..end_byte]
        .rfind(needle)
        .map(|pos| byte_to_char(haystack, pos))
}
