//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, pattern compilation)
//!     → AppConfig (validated, immutable)
//!     → RedirectConfig compiled and shared via ArcSwap
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of Arc<RedirectConfig>
//!     → next request observes new config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Bad deny patterns fail at load, never per request

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use schema::AppConfig;
pub use schema::AppSettings;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::RedirectSettings;
