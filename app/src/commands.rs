//! Command handlers
//!
//! Each handler wraps a core call in a `CommandResult` so the caller always
//! gets one JSON object per command, successful or not.

use serde::{Deserialize, Serialize};

use eventdesk_core::{Activation, App, HistoryHost, ProxyRule, RouteEntry};

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NavigationInfo {
    pub path: String,
    pub address: String,
    pub view: String,
    pub found: bool,
}

impl NavigationInfo {
    fn from_activation<H: HistoryHost>(app: &App<H>, activation: Activation) -> Self {
        Self {
            view: activation.resolution.view_or(app.fallback_view()).to_string(),
            found: activation.resolution.is_found(),
            path: activation.path,
            address: activation.address,
        }
    }
}

/// Report whatever the last navigation step activated
fn last_navigation<H: HistoryHost>(app: &App<H>) -> CommandResult<NavigationInfo> {
    match app.last_activation() {
        Some(activation) => CommandResult::ok(NavigationInfo::from_activation(app, activation)),
        None => CommandResult::err("No navigation has happened yet".to_string()),
    }
}

#[derive(Debug, Serialize)]
pub struct RoutesInfo {
    pub mode: String,
    pub fallback_view: String,
    pub routes: Vec<RouteEntry>,
    pub proxy: Vec<ProxyRule>,
}

pub fn start<H: HistoryHost>(app: &App<H>) -> CommandResult<NavigationInfo> {
    app.start();
    last_navigation(app)
}

pub fn navigate<H: HistoryHost>(app: &App<H>, path: &str) -> CommandResult<NavigationInfo> {
    if path.trim().is_empty() {
        return CommandResult::err("Navigation target cannot be empty".to_string());
    }

    app.navigate(path);
    last_navigation(app)
}

pub fn back<H: HistoryHost>(app: &App<H>) -> CommandResult<NavigationInfo> {
    match app.back() {
        Some(_) => last_navigation(app),
        None => CommandResult::err("No earlier history entry".to_string()),
    }
}

pub fn routes<H: HistoryHost>(app: &App<H>) -> CommandResult<RoutesInfo> {
    CommandResult::ok(RoutesInfo {
        mode: app.mode().to_string(),
        fallback_view: app.fallback_view().to_string(),
        routes: app.table().iter().cloned().collect(),
        proxy: app.proxy().rules().to_vec(),
    })
}
