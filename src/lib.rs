//! Hash-routing redirect middleware.
//!
//! Full-page requests to a server-rendered app are redirected to their
//! client-side equivalent (`/foo/bar` → `/#/foo/bar`), while XHR requests,
//! static assets, the app root and configured deny patterns pass through.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod redirect;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use redirect::{decide, RedirectConfig, RedirectResult, RequestDescriptor};
