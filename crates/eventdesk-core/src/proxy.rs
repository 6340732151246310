//! Dev-server forwarding table
//!
//! During local development, some path prefixes belong to the backend
//! process rather than to the front-end router. This module only records
//! those prefixes and answers "who owns this path"; the forwarding itself
//! is done by the dev server.
//!
//! Prefix matching stops at segment boundaries: `/api` owns `/api` and
//! `/api/stats`, but not `/apiary`. The longest matching prefix wins.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

use crate::error::CoreError;
use crate::Result;

/// Backend every default rule forwards to
const DEFAULT_BACKEND: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRule {
    /// Path prefix, starting with `/`
    pub prefix: String,
    /// Backend origin requests are forwarded to, checked by [`ProxyTable::new`]
    pub target: String,
    /// Upgrade to a bidirectional stream instead of request/response
    #[serde(default)]
    pub websocket: bool,
    /// Rewrite the Host header to the target origin
    #[serde(default = "default_change_origin")]
    pub change_origin: bool,
}

fn default_change_origin() -> bool {
    true
}

impl ProxyRule {
    pub fn new(prefix: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            target: target.into(),
            websocket: false,
            change_origin: default_change_origin(),
        }
    }

    pub fn target_url(&self) -> Result<Url> {
        let url = Url::parse(&self.target).map_err(|e| {
            CoreError::InvalidProxyRule(format!("bad target {:?}: {}", self.target, e))
        })?;

        match url.scheme() {
            "http" | "https" | "ws" | "wss" => Ok(url),
            scheme => Err(CoreError::InvalidProxyRule(format!(
                "unsupported target scheme {:?} for {}",
                scheme, self.prefix
            ))),
        }
    }

    pub fn with_websocket(mut self) -> Self {
        self.websocket = true;
        self
    }

    /// True if `path` (query and fragment ignored) falls under this prefix
    pub fn matches(&self, path: &str) -> bool {
        let cut = path.find(['?', '#']).unwrap_or(path.len());
        let path = &path[..cut];
        let prefix = self.prefix.trim_end_matches('/');

        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Rules for the registration backend: REST API, event stream, photos
    pub fn defaults() -> Vec<ProxyRule> {
        vec![
            ProxyRule::new("/api", DEFAULT_BACKEND),
            ProxyRule::new("/socket.io", DEFAULT_BACKEND).with_websocket(),
            ProxyRule::new("/foto_peserta", DEFAULT_BACKEND),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProxyTable {
    rules: Vec<ProxyRule>,
}

impl ProxyTable {
    pub fn new(rules: Vec<ProxyRule>) -> Result<Self> {
        let mut seen = HashSet::new();

        for rule in &rules {
            if !rule.prefix.starts_with('/') || rule.prefix.trim_end_matches('/').is_empty() {
                return Err(CoreError::InvalidProxyRule(format!(
                    "prefix must be a non-root path: {:?}",
                    rule.prefix
                )));
            }

            if !seen.insert(rule.prefix.trim_end_matches('/')) {
                return Err(CoreError::InvalidProxyRule(format!(
                    "duplicate prefix: {}",
                    rule.prefix
                )));
            }

            rule.target_url()?;
        }

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[ProxyRule] {
        &self.rules
    }

    /// Most specific rule owning `path`
    pub fn rule_for(&self, path: &str) -> Option<&ProxyRule> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(path))
            .max_by_key(|rule| rule.prefix.trim_end_matches('/').len())
    }

    pub fn is_forwarded(&self, path: &str) -> bool {
        self.rule_for(path).is_some()
    }
}
