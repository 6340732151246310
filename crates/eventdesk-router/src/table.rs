//! Route table
//!
//! An ordered, immutable list of `path → view` entries. Paths are literal:
//! no parameters, no wildcards, no nesting. Construction rejects the whole
//! table if any entry is malformed or shares its path with another entry.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::RouterError;
use crate::view::ViewId;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Literal URL path, always starting with `/`
    pub path: String,
    /// View activated when the path matches
    pub view: ViewId,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, view: impl Into<ViewId>) -> Self {
        Self {
            path: path.into(),
            view: view.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, keeping declaration order.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            validate_path(&entry.path)?;

            if !seen.insert(entry.path.as_str()) {
                tracing::error!(path = %entry.path, "Duplicate route path in table");
                return Err(RouterError::DuplicatePath(entry.path.clone()));
            }
        }

        tracing::debug!(routes = entries.len(), "Route table built");

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.view_for(path).is_some()
    }

    /// Exact lookup, first declared entry wins.
    pub fn view_for(&self, path: &str) -> Option<&ViewId> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| &entry.view)
    }
}

/// One leading slash, no query, no fragment
fn validate_path(path: &str) -> Result<()> {
    if !path.starts_with('/') || path.starts_with("//") || path.contains(['?', '#']) {
        return Err(RouterError::InvalidPath(path.to_string()));
    }
    Ok(())
}
