//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router for the fronted application
//! - Mount static files under the configured static URL
//! - Wire up middleware (tracing, hash redirect)
//! - Apply hot-reloaded redirect settings
//! - Serve until the shutdown signal fires

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::{
    http::{header, StatusCode},
    middleware,
    response::{Html, IntoResponse},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::middleware::{redirect_middleware, RedirectState};
use crate::redirect::{RedirectConfig, RedirectConfigError};

/// Page served when no index file is configured.
const DEFAULT_INDEX: &str = "<!doctype html><html><head><title>app</title></head><body><div id=\"app\"></div></body></html>";

/// HTTP server fronting a hash-routed application.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    redirect: Arc<ArcSwap<RedirectConfig>>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails if a deny pattern does not compile.
    pub fn new(config: AppConfig) -> Result<Self, RedirectConfigError> {
        let redirect_config = RedirectConfig::from_settings(&config.redirect)?;

        tracing::info!(
            prefix = %redirect_config.prefix(),
            deny_patterns = redirect_config.deny_list().len(),
            static_urls = ?config.redirect.static_url,
            "Redirect configuration compiled"
        );

        let state = RedirectState::new(redirect_config);
        let redirect = state.config.clone();
        let router = Self::build_router(&config, state);

        Ok(Self {
            router,
            config,
            redirect,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: RedirectState) -> Router {
        let mut router = Router::new();

        if let (Some(dir), Some(url)) = (&config.app.static_dir, config.redirect.static_url.first()) {
            let mount = url.trim_end_matches('/');
            if mount.is_empty() {
                tracing::warn!(static_url = %url, "Cannot mount static files at the root, skipping");
            } else {
                tracing::info!(mount = %mount, dir = %dir, "Serving static files");
                router = router.nest_service(mount, ServeDir::new(dir));
            }
        }

        router = match &config.app.index_file {
            Some(index) => router.fallback_service(ServeFile::new(index)),
            None => router.fallback(default_index),
        };

        router
            .layer(middleware::from_fn_with_state(state, redirect_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Redirect settings arriving on `config_updates` replace the live ones;
    /// the server stops once `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<AppConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let redirect = self.redirect.clone();
        let mut current = self.config.clone();
        tokio::spawn(async move {
            while let Some(new_config) = config_updates.recv().await {
                if let Some(effective) = apply_config(&redirect, &current, &new_config) {
                    current = effective;
                }
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Handle to the live redirect configuration.
    pub fn redirect_config(&self) -> Arc<ArcSwap<RedirectConfig>> {
        self.redirect.clone()
    }
}

/// Swap in the redirect settings from `next` and return the configuration
/// now in effect. Returns `None` (keeping the running settings) if they fail
/// to compile.
///
/// Listener, static mount and index changes need a restart: the router is
/// fixed at startup, so those fields are carried over from `current`. That
/// includes `static_url`, which must keep matching the mounted `ServeDir`.
pub fn apply_config(
    live: &ArcSwap<RedirectConfig>,
    current: &AppConfig,
    next: &AppConfig,
) -> Option<AppConfig> {
    let mut effective = next.clone();
    effective.listener = current.listener.clone();
    effective.app = current.app.clone();
    effective.redirect.static_url = current.redirect.static_url.clone();

    let compiled = match RedirectConfig::from_settings(&effective.redirect) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Rejected redirect settings, keeping current configuration");
            return None;
        }
    };

    if current.listener.bind_address != next.listener.bind_address {
        tracing::warn!(
            old = %current.listener.bind_address,
            new = %next.listener.bind_address,
            "Listener address changes require a restart"
        );
    }
    if current.redirect.static_url != next.redirect.static_url {
        tracing::warn!(
            old = ?current.redirect.static_url,
            new = ?next.redirect.static_url,
            "Static URL changes require a restart"
        );
    }
    if current.app.static_dir != next.app.static_dir || current.app.index_file != next.app.index_file {
        tracing::warn!("Static directory and index file changes require a restart");
    }

    tracing::info!(
        prefix = %compiled.prefix(),
        deny_patterns = compiled.deny_list().len(),
        "Redirect configuration reloaded"
    );
    live.store(Arc::new(compiled));
    Some(effective)
}

async fn default_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-cache")],
        Html(DEFAULT_INDEX),
    )
}
