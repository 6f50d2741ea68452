//! Request filters applied before the application handlers.

pub mod redirect;

pub use redirect::{full_path, is_async_request, redirect_middleware, RedirectState, X_REQUESTED_WITH};
