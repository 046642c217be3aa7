#![forbid(unsafe_code)]

//! Character storage for revbuf.
//!
//! This crate provides the leaf storage layer under the history-tracked
//! editor in `revbuf`:
//!
//! - [`TextBuffer`] - rope-backed, char-indexed text with checked and
//!   unchecked splice, substring extraction, and in-place reversal
//! - [`search`] - literal substring search by char index
//!
//! # Role in revbuf
//! `revbuf-text` knows nothing about history. It is mutated exclusively by
//! `revbuf::Editor`, which validates every range before touching the buffer
//! and records how to reverse each edit.

pub mod buffer;
pub mod search;

pub use buffer::{BufferError, DEFAULT_CAPACITY_HINT, TextBuffer};
