//! Persistence and configuration-sync layer for a multi-guild Discord bot.
//!
//! The crate models a guild's identity, its externally hosted YAML configuration, its
//! emoji cache and its ban-list cache, and keeps each of them in sync with Discord.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Gateway event handlers that drive the sync operations
//! - **Service Layer** (`service/`) - Guild record operations, config URL validation and config loading
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, the config schema and live Discord snapshots
//! - **Error Layer** (`error/`) - Library and application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection, migrations and HTTP client setup

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
