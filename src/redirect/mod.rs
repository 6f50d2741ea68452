//! Hash-routing redirect subsystem.
//!
//! # Data Flow
//! ```text
//! RedirectSettings (from config file)
//!     → RedirectConfig::from_settings (normalize prefix, compile patterns)
//!     → RedirectConfig (immutable, shared via ArcSwap)
//!
//! Per request:
//!     RequestDescriptor (async flag, full path)
//!     → decision.rs (static → deny → async → mount point)
//!     → RedirectResult::NoAction | RedirectTo(prefix + "#" + path)
//! ```
//!
//! # Design Decisions
//! - No dependency on HTTP types; the middleware adapts requests
//! - Patterns compiled once, never per request
//! - Path passed through verbatim, no decoding

pub mod decision;
pub mod patterns;
pub mod prefix;
pub mod static_paths;

pub use decision::{decide, Outcome, RedirectConfig, RedirectConfigError, RedirectResult, RequestDescriptor};
pub use patterns::DenyList;
pub use prefix::normalize_prefix;
pub use static_paths::{NoStaticRoutes, StaticResolver, StaticUrlPrefixes};
