use std::io::Write;
use std::sync::Arc;

use eventdesk_core::{
    App, Config, CoreError, HistoryHost, HistoryMode, MemoryHistory, NavigationTrigger,
    Resolution, RouterError, ViewId,
};
use parking_lot::Mutex;

fn matched(view: &str) -> Resolution {
    Resolution::Matched {
        view: ViewId::from(view),
    }
}

#[test]
fn test_registration_front_end_scenario() {
    let app = App::in_memory(&Config::default()).unwrap();

    assert_eq!(app.resolve("/analytics"), matched("Analytics"));
    assert_eq!(
        app.resolve("/missing"),
        Resolution::NotFound {
            path: "/missing".to_string()
        }
    );
    assert_eq!(app.resolve("/booth?x=1"), matched("Booth"));

    for (path, view) in [
        ("/", "Home"),
        ("/register", "Register"),
        ("/booth", "Booth"),
        ("/analytics", "Analytics"),
        ("/dashboard", "Dashboard"),
    ] {
        assert_eq!(app.resolve(path), matched(view));
    }
}

#[test]
fn test_navigation_is_reflected_by_shared_host() {
    let host = MemoryHistory::new("/");
    let address_bar = host.clone();
    let app = App::new(&Config::default(), host).unwrap();

    assert_eq!(app.navigate("/booth"), matched("Booth"));
    assert_eq!(address_bar.current_address(), "/booth");

    assert!(!app.navigate("/unknown-path").is_found());
    assert_eq!(address_bar.current_address(), "/unknown-path");

    // Back button delivered by the host
    assert!(address_bar.go(-1));
    assert_eq!(app.current_view().as_str(), "Booth");
}

#[test]
fn test_host_back_button_reaches_listeners() {
    let host = MemoryHistory::new("/");
    let address_bar = host.clone();
    let mut app = App::new(&Config::default(), host).unwrap();

    let pops: Arc<Mutex<Vec<(String, Option<String>)>>> = Arc::default();
    let sink = Arc::clone(&pops);
    app.on_activate(move |activation| {
        if activation.trigger == NavigationTrigger::Pop {
            sink.lock().push((
                activation.path.clone(),
                activation.resolution.view().map(ViewId::to_string),
            ));
        }
    });

    app.navigate("/register");
    app.navigate("/booth");

    // The host moves on its own, then reports the change
    assert!(address_bar.go(-1));
    assert_eq!(app.handle_pop(), matched("Register"));
    assert!(address_bar.go(1));
    assert_eq!(app.handle_pop(), matched("Booth"));

    assert_eq!(
        *pops.lock(),
        vec![
            ("/register".to_string(), Some("Register".to_string())),
            ("/booth".to_string(), Some("Booth".to_string())),
        ]
    );
    assert_eq!(
        app.last_activation().map(|a| a.trigger),
        Some(NavigationTrigger::Pop)
    );
}

#[test]
fn test_successive_back_presses_resolve_in_order() {
    let mut app = App::in_memory(&Config::default()).unwrap();
    let views: Arc<Mutex<Vec<String>>> = Arc::default();

    let sink = Arc::clone(&views);
    app.on_activate(move |activation| {
        if activation.trigger == NavigationTrigger::Pop {
            sink.lock().push(activation.resolution.view_or(&ViewId::from("?")).to_string());
        }
    });

    for path in ["/register", "/booth", "/analytics", "/dashboard"] {
        app.navigate(path);
    }
    while app.back().is_some() {}

    assert_eq!(
        *views.lock(),
        vec!["Analytics", "Booth", "Register", "Home"]
    );
}

#[test]
fn test_duplicate_path_in_config_file_fails_at_startup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"routes": [{{"path": "/", "view": "Home"}}, {{"path": "/", "view": "Landing"}}]}}"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    match App::in_memory(&config) {
        Err(CoreError::Router(RouterError::DuplicatePath(path))) => assert_eq!(path, "/"),
        Err(e) => panic!("Expected DuplicatePath, got {}", e),
        Ok(_) => panic!("Expected DuplicatePath, got a running app"),
    }
}

#[test]
fn test_load_hash_mode_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"history_mode": "hash", "fallback_view": "Missing", "dev_server": {{"port": 8080}}}}"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.history_mode, HistoryMode::Hash);
    assert_eq!(config.dev_server.port, 8080);
    assert_eq!(config.dev_server.proxy.len(), 3);

    let app = App::in_memory(&config).unwrap();
    app.navigate("/nowhere");
    assert_eq!(app.navigator().host().current_address(), "/#/nowhere");
    assert_eq!(app.current_view().as_str(), "Missing");
}

#[test]
fn test_missing_config_file() {
    let result = Config::load("/nonexistent/eventdesk.json");
    assert!(matches!(result, Err(CoreError::Io(_))));
}
