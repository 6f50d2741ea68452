//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Redirect behavior.
    pub redirect: RedirectSettings,

    /// The application being fronted (static files, index page).
    pub app: AppSettings,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Redirect settings. The upper-case aliases keep the historical setting
/// names working.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RedirectSettings {
    /// Mount point the hash-routed app lives under. Absent means `/`.
    #[serde(alias = "AJAX_REDIRECTION_PREFIX")]
    pub prefix: Option<String>,

    /// Regexes; a path matching any of them is never redirected.
    #[serde(alias = "DISABLE_REDIRECT")]
    pub disable_redirect: Vec<String>,

    /// URL prefixes of static asset routes (e.g. "/static/").
    #[serde(alias = "STATIC_URL")]
    pub static_url: Vec<String>,
}

/// The fronted application.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppSettings {
    /// Directory served under the first `static_url` entry.
    pub static_dir: Option<String>,

    /// HTML page returned for requests that are not redirected.
    pub index_file: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
