//! SeaORM entities for the codearena database.

pub mod prelude;

pub mod user;
