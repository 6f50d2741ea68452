//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Redirect middleware produces:
//!     → logging.rs (structured log events per decision)
//!     → metrics.rs (decision counters by outcome)
//!
//! Consumers:
//!     → stdout (tracing fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - RUST_LOG wins over the configured level
//! - Metrics are cheap (atomic increments) and no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
