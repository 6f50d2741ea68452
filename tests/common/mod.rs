//! Shared utilities for integration tests.

use axum::body::Body;
use axum::http::Request;
use hash_redirect::config::AppConfig;

/// Config with the given prefix and deny patterns and `/static/` as the
/// static URL.
pub fn config_with(prefix: Option<&str>, deny: &[&str]) -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.redirect.prefix = prefix.map(str::to_string);
    config.redirect.disable_redirect = deny.iter().map(|s| s.to_string()).collect();
    config.redirect.static_url = vec!["/static/".to_string()];
    config
}

/// A full-page GET.
#[allow(dead_code)]
pub fn page(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// A script-initiated GET.
#[allow(dead_code)]
pub fn xhr(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("X-Requested-With", "XMLHttpRequest")
        .body(Body::empty())
        .unwrap()
}

/// A scratch directory holding `index.html` and `static/app.js`.
#[allow(dead_code)]
pub fn site_dir(name: &str) -> std::path::PathBuf {
    let root = std::env::temp_dir().join(format!("hash_redirect_{}_{}", name, std::process::id()));
    let static_dir = root.join("static");
    std::fs::create_dir_all(&static_dir).unwrap();
    std::fs::write(root.join("index.html"), "<html>index</html>").unwrap();
    std::fs::write(static_dir.join("app.js"), "console.log('app');").unwrap();
    root
}
