//! Business logic between controllers and the data layer.

pub mod auth;
pub mod chat;
