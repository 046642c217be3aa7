use revbuf_text::BufferError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditError>;

/// Errors reported by editor operations.
///
/// Every operation validates its arguments before touching the buffer or
/// the history, so an `Err` always means nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("range {start}..{end} out of bounds (length {length})")]
    Range {
        start: usize,
        end: usize,
        length: usize,
    },

    #[error("index {index} out of bounds (length {length})")]
    Index { index: usize, length: usize },

    #[error("invalid size: {requested}")]
    InvalidSize { requested: i64 },

    #[error("invalid code point: {0:#x}")]
    InvalidCodePoint(u32),
}

impl EditError {
    /// Whether this is a bad index or range argument.
    #[must_use]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::Range { .. } | Self::Index { .. })
    }

    pub(crate) fn range(start: usize, end: usize, length: usize) -> Self {
        Self::Range { start, end, length }
    }

    pub(crate) fn index(index: usize, length: usize) -> Self {
        Self::Index { index, length }
    }
}

impl From<BufferError> for EditError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::OutOfRange { start, end, length } => Self::Range { start, end, length },
        }
    }
}
