//! EventDesk Core
//!
//! Startup and coordination layer for the event front end.
//! Configuration is validated once, up front: a bad route table or a route
//! hidden behind a dev-proxy prefix stops the process before any navigation.

mod app;
mod config;
mod error;
mod proxy;

pub use app::App;
pub use config::{Config, DevServerConfig, RouteConfig};
pub use error::CoreError;
pub use proxy::{ProxyRule, ProxyTable};

// Re-export router components
pub use eventdesk_router::{
    Activation, HistoryEntry, HistoryHost, HistoryMode, MemoryHistory, NavigationTrigger,
    Navigator, Resolution, RouteEntry, RouteResolver, RouteTable, RouterError, ViewId,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
