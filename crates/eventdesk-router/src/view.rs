//! View identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque name of the page-level view a route activates.
///
/// The router never interprets it; the rendering layer maps it to a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ViewId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ViewId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ViewId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
