//! Static asset path resolution.
//!
//! Static assets must load directly, so any path the resolver claims is
//! never redirected.

use crate::redirect::prefix::normalize_prefix;

/// Answers whether a request path is served by a static-file route.
pub trait StaticResolver: Send + Sync + std::fmt::Debug {
    /// Returns true if `full_path` resolves to a static asset.
    fn is_static(&self, full_path: &str) -> bool;
}

/// Resolves paths that start with one of the configured static URL prefixes
/// (e.g. `/static/`). The query string is ignored. Prefixes are stored with a
/// trailing `/`, so `/static` covers `/static/app.js` but not `/staticky`.
#[derive(Debug, Clone, Default)]
pub struct StaticUrlPrefixes {
    prefixes: Vec<String>,
}

impl StaticUrlPrefixes {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .filter(|p| !p.as_ref().is_empty())
                .map(|p| normalize_prefix(Some(p.as_ref())))
                .collect(),
        }
    }
}

impl StaticResolver for StaticUrlPrefixes {
    fn is_static(&self, full_path: &str) -> bool {
        let path = full_path.split('?').next().unwrap_or(full_path);
        self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}

/// Resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStaticRoutes;

impl StaticResolver for NoStaticRoutes {
    fn is_static(&self, _full_path: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_resolution() {
        let resolver = StaticUrlPrefixes::new(["/static/", "/media/"]);
        assert!(resolver.is_static("/static/app.js"));
        assert!(resolver.is_static("/media/logo.png?v=3"));
        assert!(!resolver.is_static("/staticky"));
        assert!(!resolver.is_static("/app?next=/static/x"));
    }

    #[test]
    fn test_empty_prefixes_ignored() {
        let resolver = StaticUrlPrefixes::new([""]);
        assert!(!resolver.is_static("/"));
        assert!(!resolver.is_static("/static/app.js"));
    }

    #[test]
    fn test_prefix_without_slash_is_a_directory() {
        let resolver = StaticUrlPrefixes::new(["/static"]);
        assert!(resolver.is_static("/static/app.js"));
        assert!(!resolver.is_static("/staticky"));
        assert!(!resolver.is_static("/static_old/app.js"));
    }

    #[test]
    fn test_no_static_routes() {
        assert!(!NoStaticRoutes.is_static("/static/app.js"));
    }
}
