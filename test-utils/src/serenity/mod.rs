//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return, so that conversions from live Discord objects
//! can be tested without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_ban, create_test_emoji, create_test_guild};
//!
//! let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));
//! let emoji = create_test_emoji(555, "pepe", &[111, 222]);
//! let ban = create_test_ban(42, "spammer", Some("spam"));
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `emoji::create_test_emoji` - Create Serenity Emoji objects
//! - `ban::create_test_ban` / `ban::create_test_user` - Create Serenity Ban and User objects

pub mod ban;
pub mod emoji;
pub mod guild;

pub use ban::{create_test_ban, create_test_user};
pub use emoji::create_test_emoji;
pub use guild::create_test_guild;
