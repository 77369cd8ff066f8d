//! Business logic for guild records and their caches.
//!
//! - `config_url` - Allow-list check and gist normalization for config URLs
//! - `config_loader` - Fetch, parse and validate a remote guild config
//! - `ban_source` - Where live ban lists come from
//! - `guild` - Guild record operations: create, sync, reload, config access, ban sync

pub mod ban_source;
pub mod config_loader;
pub mod config_url;
pub mod guild;

pub use ban_source::BanSource;
pub use config_loader::{ConfigLoader, ConfigSource, HttpConfigSource};
pub use config_url::validate_config_url;
pub use guild::GuildService;
