//! Guildkeeper Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the guildkeeper
//! crate. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for the guild tables, and builders for serenity objects.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Row factories for guilds, emojis, bans and users
//! - **serenity**: Live Discord objects deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Guild;
//!
//! #[tokio::test]
//! async fn test_guild_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Guild)
//!         .build()
//!         .await?;
//!
//!     let db = &test.db;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
