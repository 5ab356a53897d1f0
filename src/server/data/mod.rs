//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service and controller layers never touch entities directly.

pub mod user;

#[cfg(test)]
mod test;
