#![forbid(unsafe_code)]

//! Inverse actions recorded for every edit.
//!
//! An inverse action is plain data: positions, lengths and the text that
//! was removed. It never holds a reference into the buffer, so its meaning
//! is frozen when it is recorded and stays valid until it is popped.
//!
//! # Composite ordering
//!
//! `replace(start, end, new)` records two sub-inverses, run A then B:
//!
//! ```text
//! after the edit:   [prefix][new][suffix]
//! A: ReinsertAt  { position: start + len(new), text: old }  (elided if old is empty)
//!                   [prefix][new][old][suffix]
//! B: DeleteRange { start, end: start + len(new) }           (elided if new is empty)
//!                   [prefix][old][suffix]
//! ```
//!
//! B's range is exactly where the new text landed, and it is still there
//! when B runs because A only inserts to its right.

use std::fmt;

use revbuf_text::TextBuffer;
use smallvec::SmallVec;

/// What kind of edit a history entry undoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// Text inserted without removing anything (insert, append).
    Insert,
    /// Text removed without inserting anything.
    Delete,
    /// A range replaced by new text.
    Replace,
    /// A single character overwritten.
    SetChar,
    /// The buffer truncated or padded with NUL characters.
    SetLength,
    /// The whole buffer reversed.
    Reverse,
}

impl EditKind {
    /// Human-readable description for display.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Insert => "Insert text",
            Self::Delete => "Delete text",
            Self::Replace => "Replace text",
            Self::SetChar => "Set character",
            Self::SetLength => "Set length",
            Self::Reverse => "Reverse",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// One primitive undo step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InverseStep {
    /// Insert `text` at char index `position`.
    ReinsertAt { position: usize, text: String },
    /// Remove the chars in `start..end`.
    DeleteRange { start: usize, end: usize },
    /// Reverse the whole buffer.
    ReverseWhole,
}

impl InverseStep {
    /// Run this step against `buffer`.
    ///
    /// # Panics
    ///
    /// Panics if the step's positions do not fit `buffer`, which only happens
    /// when it is applied to a buffer other than the one it was recorded on.
    pub fn apply_to(&self, buffer: &mut TextBuffer) {
        match self {
            Self::ReinsertAt { position, text } => buffer.splice(*position..*position, text),
            Self::DeleteRange { start, end } => buffer.splice(*start..*end, ""),
            Self::ReverseWhole => buffer.reverse_in_place(),
        }
    }

    /// Size in bytes for memory accounting.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        let payload = match self {
            Self::ReinsertAt { text, .. } => text.len(),
            Self::DeleteRange { .. } | Self::ReverseWhole => 0,
        };
        std::mem::size_of::<Self>() + payload
    }
}

/// The recorded inverse of one mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InverseAction {
    /// A single primitive step.
    Step(InverseStep),
    /// Primitive steps executed in order as one unit.
    Composite(SmallVec<[InverseStep; 2]>),
}

impl InverseAction {
    /// The inverse of replacing the chars `deleted` at `start` with
    /// `inserted_len` new characters.
    #[must_use]
    pub fn for_replace(start: usize, deleted: String, inserted_len: usize) -> Self {
        let mut steps = SmallVec::new();
        if !deleted.is_empty() {
            steps.push(InverseStep::ReinsertAt {
                position: start + inserted_len,
                text: deleted,
            });
        }
        if inserted_len > 0 {
            steps.push(InverseStep::DeleteRange {
                start,
                end: start + inserted_len,
            });
        }
        Self::Composite(steps)
    }

    /// The inverse of reversing the buffer, which is another reversal.
    #[must_use]
    pub fn for_reverse() -> Self {
        Self::Step(InverseStep::ReverseWhole)
    }

    /// The steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[InverseStep] {
        match self {
            Self::Step(step) => std::slice::from_ref(step),
            Self::Composite(steps) => steps,
        }
    }

    /// Whether undoing this action leaves the buffer unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.steps().is_empty()
    }

    /// Run every step against `buffer`, in order.
    ///
    /// # Panics
    ///
    /// Panics if applied to a buffer whose layout differs from the one the
    /// action was recorded against.
    pub fn apply_to(&self, buffer: &mut TextBuffer) {
        for step in self.steps() {
            step.apply_to(buffer);
        }
    }

    /// Size in bytes for memory accounting.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self
                .steps()
                .iter()
                .map(InverseStep::size_bytes)
                .sum::<usize>()
    }
}
