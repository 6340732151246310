//! Navigation
//!
//! ```text
//! navigate(path) / replace(path) / back() / forward() / start() / handle_pop()
//!     → host: push / replace / go / read current address
//!     → resolver: path → Resolution
//!     → listeners: Activation, in registration order
//! ```
//!
//! Everything runs synchronously on the caller's thread; a navigation is
//! fully resolved and signalled before the call returns.
//!
//! The path handed to the resolver is always read back from the address the
//! host holds, so an entry resolves the same way whether it was reached by
//! `navigate`, `back`, `forward` or a reload.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::history::HistoryHost;
use crate::mode::HistoryMode;
use crate::resolver::{Resolution, RouteResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTrigger {
    /// Host's initial load
    Initial,
    /// New history entry
    Push,
    /// Current history entry overwritten
    Replace,
    /// Back/forward through existing entries
    Pop,
}

/// What the view layer receives after every navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    pub path: String,
    pub address: String,
    pub resolution: Resolution,
    pub trigger: NavigationTrigger,
}

type Listener = Box<dyn Fn(&Activation) + Send + Sync>;

pub struct Navigator<H: HistoryHost> {
    resolver: RouteResolver,
    host: H,
    listeners: Vec<Listener>,
    last: RwLock<Option<Activation>>,
}

impl<H: HistoryHost> Navigator<H> {
    pub fn new(resolver: RouteResolver, host: H) -> Self {
        Self {
            resolver,
            host,
            listeners: Vec::new(),
            last: RwLock::new(None),
        }
    }

    pub fn resolver(&self) -> &RouteResolver {
        &self.resolver
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn mode(&self) -> HistoryMode {
        self.resolver.mode()
    }

    /// Register a view-activation listener
    pub fn on_activate<F>(&mut self, listener: F)
    where
        F: Fn(&Activation) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Resolve whatever the host shows on initial load
    pub fn start(&self) -> Resolution {
        self.activate_current(NavigationTrigger::Initial)
    }

    /// Push `path` onto history and activate its view
    pub fn navigate(&self, path: &str) -> Resolution {
        let address = self.mode().address_for(&normalize_target(path));

        // Same address twice in a row is a duplicate navigation: no new entry
        if self.host.current_address() != address {
            self.host.push_address(&address);
        }

        self.activate(address, NavigationTrigger::Push)
    }

    /// Overwrite the current history entry with `path` and activate its view
    pub fn replace(&self, path: &str) -> Resolution {
        let address = self.mode().address_for(&normalize_target(path));

        self.host.replace_address(&address);

        self.activate(address, NavigationTrigger::Replace)
    }

    /// Entry point for history moves the host made on its own (back/forward
    /// buttons, `popstate`): resolve where the host now is and signal `Pop`.
    pub fn handle_pop(&self) -> Resolution {
        self.activate_current(NavigationTrigger::Pop)
    }

    pub fn back(&self) -> Option<Resolution> {
        self.go(-1)
    }

    pub fn forward(&self) -> Option<Resolution> {
        self.go(1)
    }

    /// Move through history; `None` when the host had nowhere to go
    pub fn go(&self, delta: isize) -> Option<Resolution> {
        if !self.host.go(delta) {
            tracing::debug!(delta, "History move out of range");
            return None;
        }

        Some(self.activate_current(NavigationTrigger::Pop))
    }

    /// Route path the host currently shows
    pub fn current_path(&self) -> String {
        self.path_for_address(&self.host.current_address())
    }

    /// Resolve the current path without signalling anyone
    pub fn current(&self) -> Resolution {
        self.resolver.resolve(&self.current_path())
    }

    /// Most recent activation signalled to listeners
    pub fn last_activation(&self) -> Option<Activation> {
        self.last.read().clone()
    }

    fn path_for_address(&self, address: &str) -> String {
        match self.mode().path_from_address(address) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(address = %address, error = %e, "Unreadable host address");
                address.to_string()
            }
        }
    }

    fn activate_current(&self, trigger: NavigationTrigger) -> Resolution {
        self.activate(self.host.current_address(), trigger)
    }

    fn activate(&self, address: String, trigger: NavigationTrigger) -> Resolution {
        let path = self.path_for_address(&address);
        let resolution = self.resolver.resolve(&path);

        match resolution.view() {
            Some(view) => {
                tracing::debug!(path = %path, view = %view, trigger = ?trigger, "Navigated")
            }
            None => tracing::debug!(path = %path, trigger = ?trigger, "No route for path"),
        }

        let activation = Activation {
            path,
            address,
            resolution,
            trigger,
        };

        for listener in &self.listeners {
            listener(&activation);
        }

        let resolution = activation.resolution.clone();
        *self.last.write() = Some(activation);
        resolution
    }
}

/// Targets are always absolute route paths with a single leading slash;
/// `//x` would otherwise read as a host name.
fn normalize_target(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}
