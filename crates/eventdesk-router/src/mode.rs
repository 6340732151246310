//! History modes
//!
//! How the host address bar represents the current route path:
//! ```text
//! History  →  /booth?x=1
//! Hash     →  /#/booth?x=1
//! ```
//! The mode only affects address representation, never resolution.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RouterError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Path lives in the URL path (`/booth`)
    #[default]
    History,
    /// Path lives in the URL fragment (`/#/booth`)
    Hash,
}

impl HistoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::History => "history",
            HistoryMode::Hash => "hash",
        }
    }

    /// Address the host should display for a route path.
    pub fn address_for(&self, path: &str) -> String {
        match self {
            HistoryMode::History => path.to_string(),
            HistoryMode::Hash => format!("/#{}", path),
        }
    }

    /// Recover the route path (query included) from a host address.
    ///
    /// Accepts absolute hrefs (`http://localhost:5173/booth`) as well as
    /// relative addresses (`/booth`, `/#/booth`). The path text is returned
    /// as written: no percent-encoding, no dot-segment removal, so an address
    /// built by [`address_for`](Self::address_for) always reads back to the
    /// same path.
    pub fn path_from_address(&self, address: &str) -> Result<String> {
        let relative = strip_origin(address)?;

        let path = match self {
            HistoryMode::History => relative.split('#').next().unwrap_or(""),
            HistoryMode::Hash => relative.split_once('#').map(|(_, f)| f).unwrap_or(""),
        };

        Ok(match path {
            "" => "/".to_string(),
            path if path.starts_with('/') => path.to_string(),
            path => format!("/{}", path),
        })
    }
}

impl std::fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HistoryMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "history" => Ok(HistoryMode::History),
            "hash" => Ok(HistoryMode::Hash),
            _ => Err(format!("Unknown history mode: {}", s)),
        }
    }
}

/// Drop `scheme://authority` from an absolute href; relative addresses pass
/// through untouched.
fn strip_origin(address: &str) -> Result<&str> {
    let Some(idx) = address.find("://") else {
        return Ok(address);
    };

    let scheme = &address[..idx];
    let is_scheme = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !is_scheme {
        // `://` inside a path or query, e.g. `/login?next=http://x`
        return Ok(address);
    }

    Url::parse(address).map_err(|_| RouterError::InvalidAddress(address.to_string()))?;

    let after_scheme = &address[idx + 3..];
    let cut = after_scheme.find(['/', '?', '#']).unwrap_or(after_scheme.len());
    Ok(&after_scheme[cut..])
}
