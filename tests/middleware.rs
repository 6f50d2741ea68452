//! Redirect middleware driven in-process through the router.

use axum::http::{header, StatusCode};
use tower::ServiceExt;

use hash_redirect::http::server::apply_config;
use hash_redirect::HttpServer;

mod common;

async fn location_of(server: &HttpServer, request: axum::http::Request<axum::body::Body>) -> (StatusCode, Option<String>) {
    let response = server.router().oneshot(request).await.unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    (response.status(), location)
}

#[tokio::test]
async fn test_page_load_redirected_to_hash() {
    let server = HttpServer::new(common::config_with(None, &[])).unwrap();
    let (status, location) = location_of(&server, common::page("/test")).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/#/test"));
}

#[tokio::test]
async fn test_prefix_in_location() {
    let server = HttpServer::new(common::config_with(Some("/test_prefix"), &[])).unwrap();
    let (status, location) = location_of(&server, common::page("/test")).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/test_prefix/#/test"));
}

#[tokio::test]
async fn test_root_served() {
    let server = HttpServer::new(common::config_with(None, &[])).unwrap();
    let (status, location) = location_of(&server, common::page("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(location.is_none());
}

#[tokio::test]
async fn test_prefix_served() {
    let server = HttpServer::new(common::config_with(Some("/test"), &[])).unwrap();
    let (status, _) = location_of(&server, common::page("/test")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_xhr_passes_through() {
    let server = HttpServer::new(common::config_with(None, &[])).unwrap();
    let (status, location) = location_of(&server, common::xhr("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(location.is_none());
}

#[tokio::test]
async fn test_deny_pattern_passes_through() {
    let server = HttpServer::new(common::config_with(None, &["^disable_redirection"])).unwrap();

    let (status, _) = location_of(&server, common::page("/disable_redirection/test?num=5585")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, location) = location_of(&server, common::page("/also_disable_redirection/x")).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/#/also_disable_redirection/x"));
}

#[tokio::test]
async fn test_query_kept_verbatim() {
    let server = HttpServer::new(common::config_with(None, &[])).unwrap();
    let (_, location) = location_of(&server, common::page("/search?q=a%20b&page=2")).await;
    assert_eq!(location.as_deref(), Some("/#/search?q=a%20b&page=2"));
}

#[tokio::test]
async fn test_static_files_served_directly() {
    let dir = common::site_dir("static");
    let mut config = common::config_with(None, &[]);
    config.app.static_dir = Some(dir.join("static").to_string_lossy().into_owned());
    config.app.index_file = Some(dir.join("index.html").to_string_lossy().into_owned());
    let server = HttpServer::new(config).unwrap();

    let response = server.router().oneshot(common::page("/static/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], b"console.log('app');");

    let response = server.router().oneshot(common::page("/")).await.unwrap();
    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], b"<html>index</html>");

    std::fs::remove_dir_all(&dir).unwrap_or_default();
}

#[tokio::test]
async fn test_reload_takes_effect_on_next_request() {
    let config = common::config_with(None, &[]);
    let server = HttpServer::new(config.clone()).unwrap();

    let mut next = config.clone();
    next.redirect.prefix = Some("/v2".into());
    assert!(apply_config(&server.redirect_config(), &config, &next).is_some());

    let (_, location) = location_of(&server, common::page("/test")).await;
    assert_eq!(location.as_deref(), Some("/v2/#/test"));
}

#[tokio::test]
async fn test_static_url_change_needs_restart() {
    let dir = common::site_dir("reload_static");
    let mut config = common::config_with(None, &[]);
    config.app.static_dir = Some(dir.join("static").to_string_lossy().into_owned());
    let server = HttpServer::new(config.clone()).unwrap();

    let response = server.router().oneshot(common::page("/static/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let mut next = config.clone();
    next.redirect.static_url = vec!["/assets/".into()];
    let effective = apply_config(&server.redirect_config(), &config, &next).unwrap();
    assert_eq!(effective.redirect.static_url, vec!["/static/"]);

    // Still mounted at /static/, so still served directly.
    let response = server.router().oneshot(common::page("/static/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());

    std::fs::remove_dir_all(&dir).unwrap_or_default();
}
