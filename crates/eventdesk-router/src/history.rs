//! Host history capability
//!
//! The navigator never owns the address bar. It talks to the host through
//! [`HistoryHost`]: read the current address, push or replace it, and move
//! back and forward. [`MemoryHistory`] is an in-process host with browser
//! session-history semantics, used by the app shell and by tests.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Address-bar and session-history services provided by the host environment.
pub trait HistoryHost {
    /// Address currently shown by the host
    fn current_address(&self) -> String;

    /// Add a new entry after the current one and make it current
    fn push_address(&self, address: &str);

    /// Overwrite the current entry
    fn replace_address(&self, address: &str);

    /// Move `delta` entries through history. Returns false, without moving,
    /// when the target is out of range.
    fn go(&self, delta: isize) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub address: String,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            visited_at: Utc::now(),
        }
    }
}

#[derive(Debug)]
struct SessionHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

/// In-memory session history. Clones share the same stack.
pub struct MemoryHistory {
    inner: Arc<RwLock<SessionHistory>>,
}

impl MemoryHistory {
    /// Start a history whose only entry is `initial_address`
    pub fn new(initial_address: &str) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionHistory {
                entries: vec![HistoryEntry::new(initial_address)],
                cursor: 0,
            })),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Always false: a session history holds at least its initial entry.
    /// Present so `len` has its usual companion.
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Position of the current entry
    pub fn index(&self) -> usize {
        self.inner.read().cursor
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.inner.read().entries.clone()
    }

    pub fn can_go_back(&self) -> bool {
        self.inner.read().cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        let history = self.inner.read();
        history.cursor + 1 < history.entries.len()
    }
}

impl HistoryHost for MemoryHistory {
    fn current_address(&self) -> String {
        let history = self.inner.read();
        history.entries[history.cursor].address.clone()
    }

    fn push_address(&self, address: &str) {
        let mut history = self.inner.write();
        let keep = history.cursor + 1;
        // Pushing drops every forward entry
        history.entries.truncate(keep);
        history.entries.push(HistoryEntry::new(address));
        history.cursor = keep;
    }

    fn replace_address(&self, address: &str) {
        let mut history = self.inner.write();
        let cursor = history.cursor;
        history.entries[cursor] = HistoryEntry::new(address);
    }

    fn go(&self, delta: isize) -> bool {
        let mut history = self.inner.write();
        let target = history.cursor as isize + delta;

        if target < 0 || target >= history.entries.len() as isize {
            return false;
        }

        history.cursor = target as usize;
        true
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Clone for MemoryHistory {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addresses(history: &MemoryHistory) -> Vec<String> {
        history.entries().into_iter().map(|e| e.address).collect()
    }

    #[test]
    fn test_push_and_go() {
        let history = MemoryHistory::default();
        history.push_address("/register");
        history.push_address("/booth");

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_address(), "/booth");

        assert!(history.go(-1));
        assert_eq!(history.current_address(), "/register");
        assert!(history.go(-1));
        assert_eq!(history.current_address(), "/");
        assert!(!history.can_go_back());

        // Out of range leaves the cursor alone
        assert!(!history.go(-1));
        assert_eq!(history.current_address(), "/");

        assert!(history.go(2));
        assert_eq!(history.current_address(), "/booth");
        assert!(!history.go(1));
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let history = MemoryHistory::default();
        history.push_address("/register");
        history.push_address("/booth");
        history.go(-2);
        assert!(history.can_go_forward());

        history.push_address("/dashboard");
        assert_eq!(addresses(&history), vec!["/", "/dashboard"]);
        assert!(!history.can_go_forward());
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_replace_overwrites_current() {
        let history = MemoryHistory::new("/register");
        history.push_address("/booth");
        history.replace_address("/analytics");

        assert_eq!(addresses(&history), vec!["/register", "/analytics"]);
        assert_eq!(history.current_address(), "/analytics");
    }

    #[test]
    fn test_clones_share_state() {
        let history = MemoryHistory::default();
        let observer = history.clone();

        history.push_address("/booth");
        assert_eq!(observer.current_address(), "/booth");
        assert!(!observer.is_empty());
    }
}
