//! HTTP request handlers.
//!
//! Controllers extract request data, call into services and repositories, and convert domain
//! models to DTOs. Errors propagate as `AppError` and are rendered by its `IntoResponse`.

pub mod auth;
pub mod chat;
pub mod health;
pub mod job;

#[cfg(test)]
mod test;
