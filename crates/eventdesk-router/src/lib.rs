//! EventDesk Router
//!
//! Dispatches a navigation request (a path string) to a named view.
//!
//! - Route table: ordered `path → view` entries, validated once at startup
//! - Resolution: exact match after dropping query and fragment
//! - Navigation: pushes/replaces addresses on an injected history host,
//!   then signals the resolved view to registered listeners

mod error;
mod history;
mod mode;
mod navigator;
mod resolver;
mod table;
mod view;

pub use error::RouterError;
pub use history::{HistoryEntry, HistoryHost, MemoryHistory};
pub use mode::HistoryMode;
pub use navigator::{Activation, NavigationTrigger, Navigator};
pub use resolver::{Resolution, RouteResolver};
pub use table::{RouteEntry, RouteTable};
pub use view::ViewId;

pub type Result<T> = std::result::Result<T, RouterError>;
