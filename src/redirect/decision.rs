//! The redirect decision.
//!
//! Checks run in a fixed order and the first hit wins:
//! static route, deny pattern, async request, already at the prefix.
//! Anything left over is sent to `<prefix>#<full path>`.

use std::sync::Arc;

use crate::config::RedirectSettings;
use crate::redirect::patterns::DenyList;
use crate::redirect::prefix::normalize_prefix;
use crate::redirect::static_paths::{NoStaticRoutes, StaticResolver, StaticUrlPrefixes};

/// Read-only view of an inbound request.
#[derive(Debug, Clone, Copy)]
pub struct RequestDescriptor<'a> {
    /// Made by client-side script expecting a fragment, not a full page.
    pub is_async_request: bool,
    /// Path plus query string, starting with `/`.
    pub full_path: &'a str,
}

impl<'a> RequestDescriptor<'a> {
    pub fn new(full_path: &'a str, is_async_request: bool) -> Self {
        Self {
            is_async_request,
            full_path,
        }
    }
}

/// What the host should do with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectResult {
    /// Continue normal processing.
    NoAction,
    /// Short-circuit with a redirect to this location.
    RedirectTo(String),
}

/// The decision together with the check that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Static,
    Denied,
    Async,
    AtPrefix,
    Redirect(String),
}

impl Outcome {
    /// Short label used for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Static => "static",
            Outcome::Denied => "denied",
            Outcome::Async => "async",
            Outcome::AtPrefix => "root",
            Outcome::Redirect(_) => "redirect",
        }
    }
}

impl From<Outcome> for RedirectResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Redirect(target) => RedirectResult::RedirectTo(target),
            _ => RedirectResult::NoAction,
        }
    }
}

/// Error building a [`RedirectConfig`] from settings.
#[derive(Debug, thiserror::Error)]
pub enum RedirectConfigError {
    #[error("invalid DISABLE_REDIRECT pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Compiled, immutable redirect configuration.
#[derive(Debug, Clone)]
pub struct RedirectConfig {
    prefix: String,
    deny: DenyList,
    static_resolver: Arc<dyn StaticResolver>,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            prefix: normalize_prefix(None),
            deny: DenyList::default(),
            static_resolver: Arc::new(NoStaticRoutes),
        }
    }
}

impl RedirectConfig {
    /// Compile settings. Invalid deny patterns are rejected here so that
    /// request handling never sees them.
    pub fn from_settings(settings: &RedirectSettings) -> Result<Self, RedirectConfigError> {
        let deny = DenyList::compile(&settings.disable_redirect)?;
        let static_resolver: Arc<dyn StaticResolver> = if settings.static_url.is_empty() {
            Arc::new(NoStaticRoutes)
        } else {
            Arc::new(StaticUrlPrefixes::new(&settings.static_url))
        };

        if let Some(prefix) = settings.prefix.as_deref() {
            if !prefix.is_empty() && !prefix.starts_with('/') {
                tracing::warn!(prefix = %prefix, "Redirect prefix is not absolute, targets will be relative");
            }
        }

        Ok(Self {
            prefix: normalize_prefix(settings.prefix.as_deref()),
            deny,
            static_resolver,
        })
    }

    pub fn with_prefix(mut self, prefix: Option<&str>) -> Self {
        self.prefix = normalize_prefix(prefix);
        self
    }

    pub fn with_deny_list(mut self, deny: DenyList) -> Self {
        self.deny = deny;
        self
    }

    pub fn with_static_resolver(mut self, resolver: Arc<dyn StaticResolver>) -> Self {
        self.static_resolver = resolver;
        self
    }

    /// The trailing-slash-normalized prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn deny_list(&self) -> &DenyList {
        &self.deny
    }

    /// The normalized prefix, or the same prefix without its trailing slash.
    /// Anything longer, including a query string, is not the mount point.
    fn is_mount_point(&self, path: &str) -> bool {
        path == self.prefix
            || (self.prefix.len() > 1 && self.prefix.strip_suffix('/') == Some(path))
    }

    /// Run every check and report which one decided.
    pub fn evaluate(&self, request: &RequestDescriptor<'_>) -> Outcome {
        let path = request.full_path;

        if self.static_resolver.is_static(path) {
            return Outcome::Static;
        }
        if self.deny.is_denied(path) {
            return Outcome::Denied;
        }
        if request.is_async_request {
            return Outcome::Async;
        }
        if self.is_mount_point(path) {
            return Outcome::AtPrefix;
        }

        Outcome::Redirect(format!("{}#{}", self.prefix, path))
    }
}

/// Decide whether `request` should be sent to its hash-routed equivalent.
pub fn decide(request: &RequestDescriptor<'_>, config: &RedirectConfig) -> RedirectResult {
    config.evaluate(request).into()
}
