//! Data transfer objects shared between the server and the client.

pub mod api;
pub mod chat;
pub mod user;
