#![forbid(unsafe_code)]

//! Undo history for the editor.
//!
//! Every mutating editor call records exactly one [`HistoryEntry`]: an
//! [`EditKind`] label plus the [`InverseAction`] that restores the buffer to
//! its state before the call. Entries are plain data, so they can be
//! inspected and applied in isolation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   History                    │
//! │  ┌────────────────────────────────────────┐  │
//! │  │ Entry N  Replace [ReinsertAt, Delete]  │  │  undo(): pop + apply
//! │  ├────────────────────────────────────────┤  │ ──────────────────►
//! │  │ Entry 2  Reverse [ReverseWhole]        │  │
//! │  ├────────────────────────────────────────┤  │
//! │  │ Entry 1  Insert  [DeleteRange]         │  │
//! │  └────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`action`]: `EditKind`, `InverseStep` and `InverseAction`
//! - [`history`]: `History` stack with optional depth and byte limits
//!
//! There is no redo stack. Undoing is not itself recorded.

pub mod action;
pub mod history;

pub use action::{EditKind, InverseAction, InverseStep};
pub use history::{History, HistoryConfig, HistoryEntry};
