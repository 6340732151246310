//! Path resolution
//!
//! `resolve` is a pure function of (table, path): the query string and the
//! fragment are dropped, then the remaining path is matched exactly against
//! the table in declaration order.

use serde::{Deserialize, Serialize};

use crate::mode::HistoryMode;
use crate::table::RouteTable;
use crate::view::ViewId;

/// Outcome of matching a path against the route table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resolution {
    /// A route matched and this view should be activated
    Matched { view: ViewId },
    /// No route is registered for the path
    NotFound { path: String },
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }

    pub fn view(&self) -> Option<&ViewId> {
        match self {
            Resolution::Matched { view } => Some(view),
            Resolution::NotFound { .. } => None,
        }
    }

    /// The matched view, or `fallback` when nothing matched.
    pub fn view_or<'a>(&'a self, fallback: &'a ViewId) -> &'a ViewId {
        self.view().unwrap_or(fallback)
    }
}

#[derive(Debug, Clone)]
pub struct RouteResolver {
    table: RouteTable,
    mode: HistoryMode,
}

impl RouteResolver {
    pub fn new(table: RouteTable, mode: HistoryMode) -> Self {
        Self { table, mode }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        let path = route_path(path);

        match self.table.view_for(path) {
            Some(view) => Resolution::Matched { view: view.clone() },
            None => Resolution::NotFound {
                path: path.to_string(),
            },
        }
    }
}

/// Strip query and fragment; an empty remainder is the root path.
pub(crate) fn route_path(path: &str) -> &str {
    let cut = path.find(['?', '#']).unwrap_or(path.len());
    match &path[..cut] {
        "" => "/",
        stripped => stripped,
    }
}
