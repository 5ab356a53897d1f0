//! Client API adapter.
//!
//! Every request targets [`API_BASE`] and carries the browser's cookies so the server can
//! resolve the session across origins.

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod user;

/// Base URL of the backend API, set at build time through `API_URL`.
pub const API_BASE: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "/api",
};

/// Joins `path` onto [`API_BASE`] with exactly one slash between them.
pub fn endpoint(path: &str) -> String {
    join(API_BASE, path)
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
