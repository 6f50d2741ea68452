//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Every deny pattern must compile
//! - Static URLs must be absolute paths
//! - The prefix is not checked; any string is used as given
//! - Listener and metrics addresses must parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (i, pattern) in config.redirect.disable_redirect.iter().enumerate() {
        if let Err(e) = regex::Regex::new(pattern) {
            errors.push(ValidationError::new(
                format!("redirect.disable_redirect[{}]", i),
                // regex errors are multi-line; keep the summary line
                e.to_string().lines().last().unwrap_or_default().trim().to_string(),
            ));
        }
    }

    for (i, url) in config.redirect.static_url.iter().enumerate() {
        if !url.starts_with('/') {
            errors.push(ValidationError::new(
                format!("redirect.static_url[{}]", i),
                format!("'{}' must start with '/'", url),
            ));
        }
    }

    if config.app.static_dir.is_some() && config.redirect.static_url.is_empty() {
        errors.push(ValidationError::new(
            "app.static_dir",
            "requires at least one redirect.static_url to mount under",
        ));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
