#![forbid(unsafe_code)]

//! revbuf
//!
//! A mutable text buffer with string-builder style edits and unlimited undo.
//!
//! # Key Components
//!
//! - [`Editor`] - the buffer plus its history; every edit is undoable
//! - [`EditError`] - range, index, size and code-point failures
//! - [`TextValue`] - how inserted values become text
//! - [`undo`] - inverse actions and the history stack
//! - [`EditorConfig`] - capacity hint and history limits
//!
//! # Role in revbuf
//! `revbuf` is the core. It validates every call, records an inverse action,
//! and only then mutates the rope-backed storage from `revbuf-text`. Undo pops
//! the newest inverse action and replays it.
//!
//! # Feature flags
//! - `config`: load [`EditorConfig`] from TOML or JSON.

pub mod config;
pub mod editor;
pub mod error;
pub mod undo;
pub mod value;

#[cfg(feature = "config")]
pub use config::ConfigError;
pub use config::EditorConfig;
pub use editor::Editor;
pub use error::{EditError, Result};
pub use undo::{EditKind, History, HistoryConfig, HistoryEntry, InverseAction, InverseStep};
pub use value::{NULL_TEXT, TextValue};
