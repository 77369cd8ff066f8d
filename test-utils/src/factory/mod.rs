//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each table has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let guild = factory::create_guild(&db).await?;
//!     let ban = factory::guild_ban::GuildBanFactory::new(&db, guild.guild_id)
//!         .reason(Some("spam"))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild` - Create guild rows
//! - `guild_emoji` - Create guild emoji rows
//! - `guild_ban` - Create guild ban rows
//! - `user` - Create user rows

pub mod guild;
pub mod guild_ban;
pub mod guild_emoji;
pub mod user;

pub use guild::create_guild;
pub use guild_ban::create_ban;
pub use guild_emoji::create_emoji;
pub use user::create_user;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Returns a snowflake-sized id unique within the test binary.
///
/// Offset well above the small literal ids tests pick by hand, so the two never collide.
pub fn next_id() -> u64 {
    100_000_000_000 + NEXT_ID.fetch_add(1, Ordering::SeqCst)
}
