//! Mount-point prefix normalization.

/// Normalize the configured mount point.
///
/// Absent or empty becomes `/`; anything else gets a trailing `/` if it
/// doesn't already have one.
pub fn normalize_prefix(prefix: Option<&str>) -> String {
    match prefix {
        None | Some("") => "/".to_string(),
        Some(p) if p.ends_with('/') => p.to_string(),
        Some(p) => format!("{}/", p),
    }
}
