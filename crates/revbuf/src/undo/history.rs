#![forbid(unsafe_code)]

//! History stack of inverse actions.
//!
//! [`History`] is a LIFO stack with one [`HistoryEntry`] per completed
//! mutating call. It supports:
//!
//! - **Exact rollback**: popping and applying entries in order walks the
//!   buffer back through every prior state
//! - **Depth limits**: optional cap on the number of entries
//! - **Memory limits**: optional cap on total recorded bytes
//!
//! # Invariants
//!
//! 1. `total_bytes` always equals the sum of `size_bytes()` over all entries
//! 2. `entries.len() <= config.max_depth` (after any push)
//! 3. `total_bytes <= config.max_bytes` (after any push, if `max_bytes > 0`),
//!    except that the newest entry is never evicted
//! 4. Entries are never modified after being pushed
//!
//! # Memory Model
//!
//! Entries are stored in a `VecDeque` so the oldest can be evicted from the
//! front in O(1) when a limit is set. The default configuration is
//! unlimited, so nothing is ever evicted and draining the stack returns the
//! buffer to its construction-time content.
//!
//! ```text
//! push(e4)
//! ┌───────────────────────────────────┐
//! │ Entries: [e1, e2, e3, e4]  ← top  │
//! └───────────────────────────────────┘
//!
//! pop() x2
//! ┌───────────────────────────────────┐
//! │ Entries: [e1, e2]          ← top  │
//! └───────────────────────────────────┘
//! ```

use std::collections::VecDeque;
use std::fmt;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use super::action::{EditKind, InverseAction};

/// Limits applied to the history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct HistoryConfig {
    /// Maximum number of entries kept (`usize::MAX` = unlimited).
    pub max_depth: usize,
    /// Maximum total bytes across entries (0 = unlimited).
    pub max_bytes: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl HistoryConfig {
    /// Create a configuration with custom limits.
    ///
    /// Bounded histories evict their oldest entries, so draining one no
    /// longer reaches the construction-time content.
    #[must_use]
    pub fn new(max_depth: usize, max_bytes: usize) -> Self {
        Self {
            max_depth,
            max_bytes,
        }
    }

    /// No depth or memory limit.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            max_bytes: 0,
        }
    }

    /// Whether any limit is set.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.max_depth != usize::MAX || self.max_bytes != 0
    }

    /// Validate limits.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.max_depth == 0 {
            errors.push("history.max_depth must be at least 1".to_string());
        }
        errors
    }
}

/// One recorded edit: what it was and how to reverse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    kind: EditKind,
    action: InverseAction,
}

impl HistoryEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(kind: EditKind, action: InverseAction) -> Self {
        Self { kind, action }
    }

    /// The kind of edit this entry undoes.
    #[must_use]
    pub fn kind(&self) -> EditKind {
        self.kind
    }

    /// The inverse action.
    #[must_use]
    pub fn action(&self) -> &InverseAction {
        &self.action
    }

    /// Human-readable description for display.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// Size in bytes for memory accounting.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of::<EditKind>() + self.action.size_bytes()
    }
}

/// LIFO stack of recorded edits.
#[derive(Clone, Default)]
pub struct History {
    /// Recorded entries (newest at back).
    entries: VecDeque<HistoryEntry>,
    /// Configuration for limits.
    config: HistoryConfig,
    /// Total bytes used by all entries.
    total_bytes: usize,
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("depth", &self.entries.len())
            .field("total_bytes", &self.total_bytes)
            .field("config", &self.config)
            .finish()
    }
}

impl History {
    /// Create an empty history with the given limits.
    #[must_use]
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            entries: VecDeque::new(),
            config,
            total_bytes: 0,
        }
    }

    // ========================================================================
    // Core Operations
    // ========================================================================

    /// Push an entry and enforce limits.
    ///
    /// The edit it reverses is assumed to have already been applied.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.total_bytes += entry.size_bytes();
        self.entries.push_back(entry);
        self.enforce_limits();
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        let entry = self.entries.pop_back()?;
        self.total_bytes = self.total_bytes.saturating_sub(entry.size_bytes());
        Some(entry)
    }

    // ========================================================================
    // Info
    // ========================================================================

    /// Number of entries.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry.
    #[must_use]
    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entries from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter().rev()
    }

    /// Descriptions of the most recent entries, newest first.
    #[must_use]
    pub fn descriptions(&self, limit: usize) -> Vec<&'static str> {
        self.iter().take(limit).map(HistoryEntry::description).collect()
    }

    /// Total recorded bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.total_bytes
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Evict oldest entries until depth and memory limits hold.
    ///
    /// The entry just pushed always survives, so the latest edit stays
    /// undoable even when it alone exceeds `max_bytes`.
    fn enforce_limits(&mut self) {
        while self.entries.len() > self.config.max_depth.max(1) {
            self.evict_oldest("max_depth");
        }

        if self.config.max_bytes > 0 {
            while self.total_bytes > self.config.max_bytes && self.entries.len() > 1 {
                self.evict_oldest("max_bytes");
            }
        }
    }

    fn evict_oldest(&mut self, limit: &'static str) {
        if let Some(entry) = self.entries.pop_front() {
            self.total_bytes = self.total_bytes.saturating_sub(entry.size_bytes());
            tracing::debug!(
                target: "revbuf.history",
                limit,
                kind = entry.description(),
                depth = self.entries.len(),
                total_bytes = self.total_bytes,
                "history entry evicted"
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_entry(len: usize) -> HistoryEntry {
        HistoryEntry::new(EditKind::Insert, InverseAction::for_replace(0, String::new(), len))
    }

    fn delete_entry(text: &str) -> HistoryEntry {
        HistoryEntry::new(
            EditKind::Delete,
            InverseAction::for_replace(0, text.to_string(), 0),
        )
    }

    #[test]
    fn test_new_history() {
        let history = History::default();
        assert!(history.is_empty());
        assert_eq!(history.depth(), 0);
        assert_eq!(history.memory_usage(), 0);
        assert!(history.peek().is_none());
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut history = History::default();
        history.push(insert_entry(1));
        history.push(delete_entry("x"));

        assert_eq!(history.depth(), 2);
        assert_eq!(history.peek().map(HistoryEntry::kind), Some(EditKind::Delete));

        assert_eq!(history.pop().map(|e| e.kind()), Some(EditKind::Delete));
        assert_eq!(history.pop().map(|e| e.kind()), Some(EditKind::Insert));
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_memory_tracking() {
        let mut history = History::default();
        history.push(delete_entry("hello"));
        let after_one = history.memory_usage();
        assert!(after_one > 0);

        history.push(delete_entry("world"));
        assert!(history.memory_usage() > after_one);

        history.pop();
        assert_eq!(history.memory_usage(), after_one);
        history.pop();
        assert_eq!(history.memory_usage(), 0);
    }

    #[test]
    fn test_max_depth_evicts_oldest() {
        let mut history = History::new(HistoryConfig::new(3, 0));
        history.push(delete_entry("first"));
        for _ in 0..4 {
            history.push(insert_entry(1));
        }

        assert_eq!(history.depth(), 3);
        assert!(history.iter().all(|e| e.kind() == EditKind::Insert));
    }

    #[test]
    fn test_max_bytes_evicts_oldest() {
        let mut history = History::new(HistoryConfig::new(usize::MAX, 1));
        for i in 0..5 {
            history.push(delete_entry(&format!("cmd{i}")));
        }
        assert_eq!(history.depth(), 1, "byte limit should evict old entries");
        assert_eq!(history.peek().map(HistoryEntry::size_bytes), Some(history.memory_usage()));
    }

    #[test]
    fn test_max_bytes_keeps_newest_entry() {
        let mut history = History::new(HistoryConfig::new(usize::MAX, 16));
        let entry = delete_entry("hello world");
        assert!(entry.size_bytes() > 16);
        history.push(entry.clone());
        assert_eq!(history.depth(), 1);
        assert_eq!(history.peek(), Some(&entry));

        history.push(delete_entry("again"));
        assert_eq!(history.depth(), 1);
        assert_eq!(history.peek().map(HistoryEntry::kind), Some(EditKind::Delete));
    }

    #[test]
    fn test_descriptions_newest_first() {
        let mut history = History::default();
        history.push(insert_entry(1));
        history.push(delete_entry("a"));
        history.push(HistoryEntry::new(EditKind::Reverse, InverseAction::for_reverse()));

        assert_eq!(
            history.descriptions(5),
            vec!["Reverse", "Delete text", "Insert text"]
        );
        assert_eq!(history.descriptions(1), vec!["Reverse"]);
    }

    #[test]
    fn test_config_default_is_unlimited() {
        let config = HistoryConfig::default();
        assert_eq!(config, HistoryConfig::unlimited());
        assert_eq!(config.max_depth, usize::MAX);
        assert_eq!(config.max_bytes, 0);
        assert!(!config.is_bounded());
        assert!(HistoryConfig::new(10, 0).is_bounded());
    }

    #[test]
    fn test_config_validate() {
        assert!(HistoryConfig::default().validate().is_empty());
        let errors = HistoryConfig::new(0, 0).validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("max_depth"));
    }

    #[test]
    fn test_config_accessor() {
        let history = History::new(HistoryConfig::new(42, 1024));
        assert_eq!(history.config().max_depth, 42);
        assert_eq!(history.config().max_bytes, 1024);
    }

    #[test]
    fn test_debug_impl() {
        let history = History::default();
        let debug_str = format!("{history:?}");
        assert!(debug_str.contains("History"));
        assert!(debug_str.contains("depth"));
    }
}
