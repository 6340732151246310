//! Application configuration
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults of the registration front end.

use serde::{Deserialize, Serialize};
use std::path::Path;

use eventdesk_router::{HistoryMode, RouteEntry, RouteTable, ViewId};

use crate::error::CoreError;
use crate::proxy::{ProxyRule, ProxyTable};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub path: String,
    pub view: String,
}

impl RouteConfig {
    fn new(path: &str, view: &str) -> Self {
        Self {
            path: path.to_string(),
            view: view.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DevServerConfig {
    /// Port the dev server listens on
    pub port: u16,
    /// Prefixes forwarded to the backend instead of routed
    pub proxy: Vec<ProxyRule>,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            port: 5173,
            proxy: ProxyRule::defaults(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How the address bar represents the route path
    pub history_mode: HistoryMode,
    /// Route table, in declaration order
    pub routes: Vec<RouteConfig>,
    /// View rendered when no route matches
    pub fallback_view: String,
    pub dev_server: DevServerConfig,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;

        tracing::info!(
            path = %path.display(),
            routes = config.routes.len(),
            mode = %config.history_mode,
            "Loaded configuration"
        );

        Ok(config)
    }

    pub fn route_table(&self) -> Result<RouteTable> {
        let entries = self
            .routes
            .iter()
            .map(|route| RouteEntry::new(route.path.as_str(), route.view.as_str()))
            .collect();

        Ok(RouteTable::new(entries)?)
    }

    pub fn proxy_table(&self) -> Result<ProxyTable> {
        ProxyTable::new(self.dev_server.proxy.clone())
    }

    pub fn fallback_view(&self) -> Result<ViewId> {
        if self.fallback_view.trim().is_empty() {
            return Err(CoreError::Config("fallback_view cannot be empty".to_string()));
        }
        Ok(ViewId::new(self.fallback_view.as_str()))
    }

    /// Check the whole configuration, returning the validated tables.
    pub fn validate(&self) -> Result<(RouteTable, ProxyTable)> {
        let table = self.route_table()?;
        let proxy = self.proxy_table()?;
        self.fallback_view()?;

        // Proxy prefixes are never application routes
        for path in table.paths() {
            if let Some(rule) = proxy.rule_for(path) {
                return Err(CoreError::RouteShadowed {
                    path: path.to_string(),
                    prefix: rule.prefix.clone(),
                });
            }
        }

        Ok((table, proxy))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_mode: HistoryMode::History,
            routes: vec![
                RouteConfig::new("/", "Home"),
                RouteConfig::new("/register", "Register"),
                RouteConfig::new("/booth", "Booth"),
                RouteConfig::new("/analytics", "Analytics"),
                RouteConfig::new("/dashboard", "Dashboard"),
            ],
            fallback_view: "NotFound".to_string(),
            dev_server: DevServerConfig::default(),
        }
    }
}
