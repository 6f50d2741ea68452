//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, TraceLayer)
//!     → middleware/redirect.rs (XHR check, hash-redirect decision)
//!         → 302 Location: <prefix>#<path>   (full page load)
//!         → static files / index page       (everything else)
//! ```

pub mod middleware;
pub mod server;

pub use middleware::{redirect_middleware, RedirectState};
pub use server::HttpServer;
