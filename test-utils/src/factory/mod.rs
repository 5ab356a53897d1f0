//! Factories for inserting test entities with sensible defaults.

pub mod helpers;
pub mod user;
