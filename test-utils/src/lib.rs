//! Codearena Test Utils
//!
//! Shared testing utilities for the codearena server. Provides a builder for test contexts
//! backed by an in-memory SQLite database, a session bound to the same database, and
//! factories for inserting entities with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory::user::UserFactory};
//!
//! #[tokio::test]
//! async fn finds_user() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_user_tables().build().await?;
//!     let db = test.database().await?;
//!
//!     let user = UserFactory::new(db).name("Ada").build().await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
