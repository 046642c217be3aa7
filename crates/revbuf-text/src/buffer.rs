#![forbid(unsafe_code)]

//! Rope-backed character buffer.
//!
//! [`TextBuffer`] is a thin wrapper over [`ropey::Rope`] that exposes the
//! handful of operations an editing layer needs: length, random-access
//! character reads, substring extraction, in-place splice, and whole-sequence
//! reversal. Every index is a `char` index.
//!
//! Checked operations return [`BufferError`]; the unchecked [`TextBuffer::splice`]
//! panics on a bad range, mirroring `Rope::insert`/`Rope::remove`.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use ropey::{Rope, RopeSlice};

use crate::search;

/// Default capacity hint, matching the usual growable-string default.
pub const DEFAULT_CAPACITY_HINT: usize = 16;

/// Errors reported by checked buffer operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// The range `start..end` is not within `0..=length`, or `start > end`.
    #[error("range {start}..{end} out of bounds (length {length})")]
    OutOfRange {
        start: usize,
        end: usize,
        length: usize,
    },
}

/// Growable, char-indexed text storage.
///
/// Equality, ordering and hashing consider content only. The capacity hint
/// is carried for callers that want it reported back; ropes allocate per
/// chunk, so it never changes what is stored.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    capacity_hint: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY_HINT)
    }

    /// Create an empty buffer with a capacity hint.
    #[must_use]
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            rope: Rope::new(),
            capacity_hint,
        }
    }

    /// Create a buffer holding `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            capacity_hint: DEFAULT_CAPACITY_HINT + text.chars().count(),
        }
    }

    /// Number of characters stored.
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Whether the buffer holds no characters.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The capacity hint given at construction.
    #[must_use]
    pub fn capacity_hint(&self) -> usize {
        self.capacity_hint
    }

    /// Borrow the underlying rope.
    #[must_use]
    pub fn as_rope(&self) -> &Rope {
        &self.rope
    }

    /// Character at `index`, or `None` past the end.
    #[must_use]
    pub fn get_char(&self, index: usize) -> Option<char> {
        self.rope.get_char(index)
    }

    /// Character at `index`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] unless `index < len_chars()`.
    pub fn char_at(&self, index: usize) -> Result<char, BufferError> {
        self.rope.get_char(index).ok_or(BufferError::OutOfRange {
            start: index,
            end: index.saturating_add(1),
            length: self.len_chars(),
        })
    }

    /// Check that `range` addresses existing characters.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] unless `start <= end <= len_chars()`.
    pub fn check_range(&self, range: &Range<usize>) -> Result<(), BufferError> {
        let length = self.len_chars();
        if range.start > range.end || range.end > length {
            return Err(BufferError::OutOfRange {
                start: range.start,
                end: range.end,
                length,
            });
        }
        Ok(())
    }

    /// Copy the characters in `range` out into a `String`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] for an invalid range.
    pub fn substring(&self, range: Range<usize>) -> Result<String, BufferError> {
        self.check_range(&range)?;
        Ok(self.rope.slice(range).to_string())
    }

    /// Borrow the characters in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within `0..=len_chars()` or is reversed.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> RopeSlice<'_> {
        self.rope.slice(range)
    }

    /// Replace `range` with `text`, shifting what follows.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] for an invalid range; the buffer is left
    /// untouched.
    pub fn try_splice(&mut self, range: Range<usize>, text: &str) -> Result<(), BufferError> {
        self.check_range(&range)?;
        self.splice(range, text);
        Ok(())
    }

    /// Replace `range` with `text`, shifting what follows.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within `0..=len_chars()` or is reversed.
    pub fn splice(&mut self, range: Range<usize>, text: &str) {
        let start = range.start;
        if !range.is_empty() {
            self.rope.remove(range);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
    }

    /// Reverse the character order of the whole buffer.
    pub fn reverse_in_place(&mut self) {
        if self.len_chars() < 2 {
            return;
        }
        let mut chars: Vec<char> = self.rope.chars().collect();
        chars.reverse();
        let reversed: String = chars.into_iter().collect();
        tracing::trace!(
            target: "revbuf.text",
            len_chars = self.len_chars(),
            "buffer reversed"
        );
        self.rope = Rope::from_str(&reversed);
    }

    /// Iterate over the stored characters.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.rope.chars()
    }

    /// Contents as a string, borrowed when the rope is a single chunk.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        Cow::from(self.rope.slice(..))
    }

    /// First occurrence of `needle` at or after char index `from`.
    #[must_use]
    pub fn find(&self, needle: &str, from: usize) -> Option<usize> {
        search::find_from(&self.text(), needle, from)
    }

    /// Last occurrence of `needle` starting at or before char index `from`.
    #[must_use]
    pub fn rfind(&self, needle: &str, from: usize) -> Option<usize> {
        search::rfind_from(&self.text(), needle, from)
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rope, f)
    }
}

impl PartialEq for TextBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.rope == other.rope
    }
}

impl Eq for TextBuffer {}

impl PartialEq<str> for TextBuffer {
    fn eq(&self, other: &str) -> bool {
        self.rope == other
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.rope == *other
    }
}

impl PartialOrd for TextBuffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// UTF-8 byte order matches scalar-value order, so comparing bytes is
/// lexicographic by `char` regardless of how either rope is chunked.
impl Ord for TextBuffer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rope.bytes().cmp(other.rope.bytes())
    }
}

impl Hash for TextBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rope.hash(state);
    }
}
