//! Deny-list of path patterns exempt from redirection.
//!
//! Patterns are compiled once when the configuration is loaded. Matching uses
//! search semantics: a pattern hits anywhere in the path unless it anchors
//! itself with `^` or `$`. The leading `/` of the path is stripped first, so
//! `^admin` matches `/admin/users`.

use regex::Regex;

/// Ordered, precompiled deny patterns.
#[derive(Debug, Clone, Default)]
pub struct DenyList {
    patterns: Vec<Regex>,
}

impl DenyList {
    /// Compile the raw pattern strings, failing on the first invalid one.
    pub fn compile<I, S>(raw: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = raw
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Returns the first pattern matching `full_path`, if any.
    pub fn find_match(&self, full_path: &str) -> Option<&Regex> {
        let stripped = full_path.strip_prefix('/').unwrap_or(full_path);
        self.patterns.iter().find(|re| re.is_match(stripped))
    }

    pub fn is_denied(&self, full_path: &str) -> bool {
        self.find_match(full_path).is_some()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_pattern_matches_after_slash_strip() {
        let deny = DenyList::compile(["^disable_redirection"]).unwrap();
        assert!(deny.is_denied("/disable_redirection/test?num=5585"));
        assert!(!deny.is_denied("/also_disable_redirection/x"));
    }

    #[test]
    fn test_unanchored_pattern_searches() {
        let deny = DenyList::compile(["api/"]).unwrap();
        assert!(deny.is_denied("/v1/api/users"));
        assert!(!deny.is_denied("/apix"));
    }

    #[test]
    fn test_query_string_is_searched() {
        let deny = DenyList::compile([r"format=json"]).unwrap();
        assert!(deny.is_denied("/report?format=json"));
    }

    #[test]
    fn test_first_match_reported() {
        let deny = DenyList::compile(["^a", "b"]).unwrap();
        assert_eq!(deny.find_match("/ab").map(|r| r.as_str()), Some("^a"));
        assert_eq!(deny.find_match("/cb").map(|r| r.as_str()), Some("b"));
        assert_eq!(deny.len(), 2);
    }

    #[test]
    fn test_empty_list_denies_nothing() {
        let deny = DenyList::default();
        assert!(deny.is_empty());
        assert!(!deny.is_denied("/anything"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(DenyList::compile(["ok", "(unclosed"]).is_err());
    }
}
