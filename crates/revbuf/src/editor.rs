#![forbid(unsafe_code)]

//! History-tracked editor.
//!
//! [`Editor`] owns a [`TextBuffer`] and a [`History`]. Every mutating call
//! funnels through one private primitive, `splice_recorded`, which captures
//! the text about to be removed, pushes the matching [`InverseAction`], and
//! then performs the splice. [`Editor::reverse`] is the only mutation that
//! bypasses it, recording its own self-inverse.
//!
//! # Invariants
//!
//! 1. Each successful mutating call pushes exactly one history entry
//! 2. A call that returns `Err` leaves both content and history untouched
//! 3. [`Editor::undo`] restores the content from just before the most recent
//!    recorded call, and never fails
//! 4. Queries, comparison and hashing never consult or change the history
//!
//! # Example
//!
//! ```
//! use revbuf::Editor;
//!
//! let mut editor = Editor::from_text("Hello");
//! editor.replace(1, 4, "ipp")?;
//! assert_eq!(editor, "Hippo");
//!
//! editor.undo();
//! assert_eq!(editor, "Hello");
//! # Ok::<(), revbuf::EditError>(())
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use revbuf_text::{DEFAULT_CAPACITY_HINT, TextBuffer};

use crate::config::EditorConfig;
use crate::error::{EditError, Result};
use crate::undo::{EditKind, History, HistoryConfig, HistoryEntry, InverseAction};
use crate::value::TextValue;

/// A text buffer whose every edit can be undone.
#[derive(Clone)]
pub struct Editor {
    buffer: TextBuffer,
    history: History,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("text", &self.buffer.text())
            .field("history_depth", &self.history.depth())
            .finish()
    }
}

impl Editor {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty editor with the default capacity hint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY_HINT)
    }

    /// Create an empty editor with a capacity hint.
    ///
    /// The hint never shows up in content, equality or history.
    #[must_use]
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            buffer: TextBuffer::with_capacity(capacity_hint),
            history: History::default(),
        }
    }

    /// Create an empty editor from a signed capacity request.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidSize`] if `requested` is negative.
    pub fn try_with_capacity(requested: i64) -> Result<Self> {
        let capacity_hint =
            usize::try_from(requested).map_err(|_| EditError::InvalidSize { requested })?;
        Ok(Self::with_capacity(capacity_hint))
    }

    /// Create an editor holding `text`, with an empty history.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::with_config(text, &EditorConfig::default())
    }

    /// Create an editor holding `text` using the given settings.
    ///
    /// The capacity hint grows by the length of `text`. The initial text is
    /// not an edit, so the history starts empty.
    #[must_use]
    pub fn with_config(text: &str, config: &EditorConfig) -> Self {
        let capacity_hint = config.capacity_hint.saturating_add(text.chars().count());
        let mut buffer = TextBuffer::with_capacity(capacity_hint);
        buffer.splice(0..0, text);
        Self {
            buffer,
            history: History::new(config.history.clone()),
        }
    }

    /// Create an editor holding `text` with bounded history.
    #[must_use]
    pub fn with_history_config(text: &str, history: HistoryConfig) -> Self {
        Self::with_config(text, &EditorConfig::default().with_history(history))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of characters.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Whether the editor holds no characters.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The capacity hint given at construction.
    #[must_use]
    pub fn capacity_hint(&self) -> usize {
        self.buffer.capacity_hint()
    }

    /// Character at `index`.
    ///
    /// # Errors
    ///
    /// [`EditError::Index`] unless `index < len()`.
    pub fn char_at(&self, index: usize) -> Result<char> {
        self.buffer
            .get_char(index)
            .ok_or_else(|| EditError::index(index, self.len()))
    }

    /// Characters in `start..end`.
    ///
    /// # Errors
    ///
    /// [`EditError::Range`] unless `start <= end <= len()`.
    pub fn substring(&self, start: usize, end: usize) -> Result<String> {
        Ok(self.buffer.substring(start..end)?)
    }

    /// Characters from `start` to the end.
    ///
    /// # Errors
    ///
    /// [`EditError::Range`] if `start > len()`.
    pub fn substring_from(&self, start: usize) -> Result<String> {
        self.substring(start, self.len())
    }

    /// First occurrence of `needle`.
    #[must_use]
    pub fn index_of(&self, needle: &str) -> Option<usize> {
        self.index_of_from(needle, 0)
    }

    /// First occurrence of `needle` at or after `from`.
    ///
    /// An empty needle matches at `min(from, len())`.
    #[must_use]
    pub fn index_of_from(&self, needle: &str, from: usize) -> Option<usize> {
        self.buffer.find(needle, from)
    }

    /// Last occurrence of `needle`.
    #[must_use]
    pub fn last_index_of(&self, needle: &str) -> Option<usize> {
        self.last_index_of_from(needle, usize::MAX)
    }

    /// Last occurrence of `needle` starting at or before `from`.
    #[must_use]
    pub fn last_index_of_from(&self, needle: &str, from: usize) -> Option<usize> {
        self.buffer.rfind(needle, from)
    }

    /// Iterate over the characters.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.buffer.chars()
    }

    /// Contents as a string, borrowed when possible.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        self.buffer.text()
    }

    /// Borrow the underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Read-only view of the history stack.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of recorded edits that can be undone.
    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    /// Whether [`undo`](Self::undo) would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replace the characters in `start..end` with `value`.
    ///
    /// # Errors
    ///
    /// [`EditError::Range`] unless `start <= end <= len()`.
    pub fn replace(&mut self, start: usize, end: usize, value: impl TextValue) -> Result<&mut Self> {
        let range = self.checked_range(start, end)?;
        let text = value.to_text();
        Ok(self.splice_recorded(EditKind::Replace, range, &text))
    }

    /// Insert `value` before the character at `offset`.
    ///
    /// # Errors
    ///
    /// [`EditError::Range`] if `offset > len()`.
    pub fn insert(&mut self, offset: usize, value: impl TextValue) -> Result<&mut Self> {
        let range = self.checked_range(offset, offset)?;
        let text = value.to_text();
        Ok(self.splice_recorded(EditKind::Insert, range, &text))
    }

    /// Insert the characters `start..end` of `value` at `offset`.
    ///
    /// # Errors
    ///
    /// [`EditError::Range`] if `offset > len()` or if `start..end` is not a
    /// valid range of `value`'s characters.
    pub fn insert_range(
        &mut self,
        offset: usize,
        value: impl TextValue,
        start: usize,
        end: usize,
    ) -> Result<&mut Self> {
        let range = self.checked_range(offset, offset)?;
        let text = value.to_text();
        let part = char_range(&text, start, end)?;
        Ok(self.splice_recorded(EditKind::Insert, range, part))
    }

    /// Append `value` to the end.
    pub fn append(&mut self, value: impl TextValue) -> &mut Self {
        let end = self.len();
        let text = value.to_text();
        self.splice_recorded(EditKind::Insert, end..end, &text)
    }

    /// Append the characters `start..end` of `value`.
    ///
    /// # Errors
    ///
    /// [`EditError::Range`] if `start..end` is not a valid range of `value`'s
    /// characters.
    pub fn append_range(&mut self, value: impl TextValue, start: usize, end: usize) -> Result<&mut Self> {
        let len = self.len();
        self.insert_range(len, value, start, end)
    }

    /// Append the character with Unicode scalar value `code_point`.
    ///
    /// # Errors
    ///
    /// [`EditError::InvalidCodePoint`] for surrogates and values above
    /// `0x10FFFF`.
    pub fn append_code_point(&mut self, code_point: u32) -> Result<&mut Self> {
        let ch = char::from_u32(code_point).ok_or(EditError::InvalidCodePoint(code_point))?;
        Ok(self.append(ch))
    }

    /// Remove the characters in `start..end`.
    ///
    /// # Errors
    ///
    /// [`EditError::Range`] unless `start <= end <= len()`.
    pub fn delete(&mut self, start: usize, end: usize) -> Result<&mut Self> {
        let range = self.checked_range(start, end)?;
        Ok(self.splice_recorded(EditKind::Delete, range, ""))
    }

    /// Remove the character at `index`.
    ///
    /// # Errors
    ///
    /// [`EditError::Index`] unless `index < len()`.
    pub fn delete_char_at(&mut self, index: usize) -> Result<&mut Self> {
        self.checked_index(index)?;
        Ok(self.splice_recorded(EditKind::Delete, index..index + 1, ""))
    }

    /// Overwrite the character at `index` with `ch`.
    ///
    /// # Errors
    ///
    /// [`EditError::Index`] unless `index < len()`.
    pub fn set_char_at(&mut self, index: usize, ch: char) -> Result<&mut Self> {
        self.checked_index(index)?;
        let mut utf8 = [0u8; 4];
        let text = ch.encode_utf8(&mut utf8);
        Ok(self.splice_recorded(EditKind::SetChar, index..index + 1, text))
    }

    /// Truncate to `new_len` characters, or pad with `'\0'` up to it.
    ///
    /// Always records one entry, even when the length is unchanged.
    pub fn set_length(&mut self, new_len: usize) -> &mut Self {
        let len = self.len();
        match new_len.cmp(&len) {
            Ordering::Less => self.splice_recorded(EditKind::SetLength, new_len..len, ""),
            Ordering::Equal => self.splice_recorded(EditKind::SetLength, len..len, ""),
            Ordering::Greater => {
                let padding = "\0".repeat(new_len - len);
                self.splice_recorded(EditKind::SetLength, len..len, &padding)
            }
        }
    }

    /// Reverse the character order.
    pub fn reverse(&mut self) -> &mut Self {
        self.history
            .push(HistoryEntry::new(EditKind::Reverse, InverseAction::for_reverse()));
        self.buffer.reverse_in_place();
        tracing::trace!(
            target: "revbuf.editor",
            kind = %EditKind::Reverse,
            len = self.len(),
            depth = self.history.depth(),
            "edit recorded"
        );
        self
    }

    /// Undo the most recent recorded edit.
    ///
    /// With an empty history this does nothing. Undoing is not itself
    /// recorded.
    pub fn undo(&mut self) {
        let Some(entry) = self.history.pop() else {
            tracing::debug!(target: "revbuf.editor", "undo on empty history");
            return;
        };
        entry.action().apply_to(&mut self.buffer);
        tracing::debug!(
            target: "revbuf.editor",
            kind = %entry.kind(),
            steps = entry.action().steps().len(),
            remaining = self.history.depth(),
            "undo applied"
        );
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn checked_range(&self, start: usize, end: usize) -> Result<Range<usize>> {
        let range = start..end;
        self.buffer.check_range(&range)?;
        Ok(range)
    }

    fn checked_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(EditError::index(index, self.len()))
        }
    }

    /// Record the inverse of replacing `range` with `text`, then do it.
    ///
    /// `range` must already be validated.
    fn splice_recorded(&mut self, kind: EditKind, range: Range<usize>, text: &str) -> &mut Self {
        let deleted = self.buffer.slice(range.clone()).to_string();
        let inserted = text.chars().count();
        let action = InverseAction::for_replace(range.start, deleted, inserted);
        self.history.push(HistoryEntry::new(kind, action));
        self.buffer.splice(range.clone(), text);
        tracing::trace!(
            target: "revbuf.editor",
            kind = %kind,
            start = range.start,
            end = range.end,
            inserted,
            depth = self.history.depth(),
            "edit recorded"
        );
        self
    }
}

/// The characters `start..end` of `text`.
fn char_range(text: &str, start: usize, end: usize) -> Result<&str> {
    let length = text.chars().count();
    if start > end || end > length {
        return Err(EditError::range(start, end, length));
    }
    let from = revbuf_text::search::char_to_byte(text, start);
    let to = revbuf_text::search::char_to_byte(text, end);
    Ok(&text[from..to])
}

// ============================================================================
// Trait impls
// ============================================================================

impl TextValue for Editor {
    fn to_text(&self) -> Cow<'_, str> {
        self.buffer.text()
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.buffer, f)
    }
}

/// Each `write_str` call is one undoable append.
impl fmt::Write for Editor {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl From<&str> for Editor {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for Editor {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}

impl PartialEq for Editor {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl Eq for Editor {}

impl PartialEq<str> for Editor {
    fn eq(&self, other: &str) -> bool {
        self.buffer == *other
    }
}

impl PartialEq<&str> for Editor {
    fn eq(&self, other: &&str) -> bool {
        self.buffer == *other
    }
}

impl PartialOrd for Editor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Editor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.buffer.cmp(&other.buffer)
    }
}

impl Hash for Editor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================
