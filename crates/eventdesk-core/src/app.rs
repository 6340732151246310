//! Application container
//!
//! Owns the validated configuration, the navigator and the dev-proxy table.
//! Construction is the only fallible step: once an `App` exists, every
//! navigation succeeds and unknown paths come back as `NotFound`.

use eventdesk_router::{
    Activation, HistoryHost, HistoryMode, MemoryHistory, Navigator, Resolution, RouteResolver,
    RouteTable, ViewId,
};

use crate::config::Config;
use crate::proxy::{ProxyRule, ProxyTable};
use crate::Result;

pub struct App<H: HistoryHost = MemoryHistory> {
    navigator: Navigator<H>,
    proxy: ProxyTable,
    fallback_view: ViewId,
}

impl App<MemoryHistory> {
    /// Build on a fresh in-memory history sitting at `/`
    pub fn in_memory(config: &Config) -> Result<Self> {
        let host = MemoryHistory::new(&config.history_mode.address_for("/"));
        Self::new(config, host)
    }
}

impl<H: HistoryHost> App<H> {
    pub fn new(config: &Config, host: H) -> Result<Self> {
        let (table, proxy) = config.validate()?;
        let fallback_view = config.fallback_view()?;

        tracing::info!(
            routes = table.len(),
            proxied_prefixes = proxy.rules().len(),
            mode = %config.history_mode,
            "Router ready"
        );

        let resolver = RouteResolver::new(table, config.history_mode);

        Ok(Self {
            navigator: Navigator::new(resolver, host),
            proxy,
            fallback_view,
        })
    }

    pub fn navigator(&self) -> &Navigator<H> {
        &self.navigator
    }

    pub fn table(&self) -> &RouteTable {
        self.navigator.resolver().table()
    }

    pub fn proxy(&self) -> &ProxyTable {
        &self.proxy
    }

    pub fn mode(&self) -> HistoryMode {
        self.navigator.mode()
    }

    pub fn fallback_view(&self) -> &ViewId {
        &self.fallback_view
    }

    pub fn on_activate<F>(&mut self, listener: F)
    where
        F: Fn(&Activation) + Send + Sync + 'static,
    {
        self.navigator.on_activate(listener);
    }

    pub fn start(&self) -> Resolution {
        self.navigator.start()
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        self.navigator.resolver().resolve(path)
    }

    pub fn navigate(&self, path: &str) -> Resolution {
        if let Some(rule) = self.proxy.rule_for(path) {
            tracing::warn!(
                path = %path,
                prefix = %rule.prefix,
                "Navigating to a path owned by the backend"
            );
        }
        self.navigator.navigate(path)
    }

    pub fn replace(&self, path: &str) -> Resolution {
        self.navigator.replace(path)
    }

    /// Host moved through history on its own (back/forward buttons)
    pub fn handle_pop(&self) -> Resolution {
        self.navigator.handle_pop()
    }

    pub fn back(&self) -> Option<Resolution> {
        self.navigator.back()
    }

    pub fn forward(&self) -> Option<Resolution> {
        self.navigator.forward()
    }

    pub fn last_activation(&self) -> Option<Activation> {
        self.navigator.last_activation()
    }

    pub fn current_path(&self) -> String {
        self.navigator.current_path()
    }

    /// View to render for the current path, fallback applied
    pub fn current_view(&self) -> ViewId {
        self.navigator.current().view_or(&self.fallback_view).clone()
    }

    /// Backend rule for a path the dev server forwards, if any
    pub fn proxy_target(&self, path: &str) -> Option<&ProxyRule> {
        self.proxy.rule_for(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_in_memory_app() {
        let app = App::in_memory(&Config::default()).unwrap();

        assert_eq!(app.start().view().map(ViewId::as_str), Some("Home"));
        assert_eq!(app.current_path(), "/");

        app.navigate("/booth");
        assert_eq!(app.current_view().as_str(), "Booth");

        app.navigate("/unknown-path");
        assert_eq!(app.current_path(), "/unknown-path");
        assert_eq!(app.current_view().as_str(), "NotFound");

        app.back();
        assert_eq!(app.current_view().as_str(), "Booth");
    }

    #[test]
    fn test_hash_mode_app() {
        let config = Config {
            history_mode: HistoryMode::Hash,
            ..Config::default()
        };
        let app = App::in_memory(&config).unwrap();

        app.navigate("/dashboard");
        assert_eq!(app.navigator().host().current_address(), "/#/dashboard");
        assert_eq!(app.current_view().as_str(), "Dashboard");
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let mut config = Config::default();
        config.routes[1].path = "/".to_string();

        let result = App::in_memory(&config);
        assert!(matches!(result, Err(CoreError::Router(_))));
    }

    #[test]
    fn test_proxy_target() {
        let app = App::in_memory(&Config::default()).unwrap();

        assert!(app.proxy_target("/socket.io/").unwrap().websocket);
        assert!(app.proxy_target("/booth").is_none());

        // Forwarded prefixes are not application routes
        assert!(!app.resolve("/api/stats").is_found());
    }
}
