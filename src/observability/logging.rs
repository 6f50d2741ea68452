//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Default filter for the configured level.
pub fn default_filter(level: &str) -> String {
    format!("hash_redirect={level},tower_http={level}")
}

/// Initialize the global subscriber. `RUST_LOG` overrides `config.log_level`.
pub fn init_logging(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(&config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let filter = default_filter("debug");
        assert_eq!(filter, "hash_redirect=debug,tower_http=debug");
        assert!(EnvFilter::try_new(&filter).is_ok());
    }
}
