//! Per-guild bot configuration schema.
//!
//! Guild administrators host their configuration as YAML at an allow-listed URL. The
//! document is stored verbatim on the guild row as JSON and parsed into [`GuildConfig`]
//! whenever the bot needs typed access to it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::GuildError;

/// Maximum length of a guild nickname enforced by Discord.
const MAX_NICKNAME_LENGTH: usize = 32;

/// Highest permission level a user or role can be granted.
pub const MAX_LEVEL: u8 = 100;

/// Typed view of a guild's raw configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuildConfig {
    /// Nickname the bot sets for itself in the guild.
    #[serde(default)]
    pub nickname: Option<String>,

    /// Permission level per user or role id.
    #[serde(default)]
    pub levels: HashMap<u64, u8>,

    #[serde(default)]
    pub commands: Option<CommandsConfig>,

    /// Dashboard access per user id.
    #[serde(default)]
    pub web: HashMap<u64, WebAccess>,

    /// Plugin sections, kept untyped; each plugin validates its own section.
    #[serde(default)]
    pub plugins: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandsConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Whether commands may be invoked by mentioning the bot.
    #[serde(default)]
    pub mention: bool,

    #[serde(default)]
    pub overrides: Vec<CommandOverride>,
}

fn default_prefix() -> String {
    "!".to_string()
}

/// Overrides the level or availability of matching commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandOverride {
    /// Command name to match; `None` matches every command of `plugin`.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub plugin: Option<String>,

    #[serde(default)]
    pub level: Option<u8>,

    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebAccess {
    Viewer,
    Editor,
    Admin,
}

impl GuildConfig {
    /// Builds the typed config from a stored raw document.
    ///
    /// Only checks the document's shape. Call [`GuildConfig::validate`] for the value
    /// constraints.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Document matched the schema's shape
    /// - `Err(GuildError::Validation)` - Unknown keys or wrongly typed values
    pub fn from_document(document: &Value) -> Result<Self, GuildError> {
        serde_json::from_value(document.clone()).map_err(|e| GuildError::Validation(e.to_string()))
    }

    /// Checks value constraints the schema's types cannot express.
    ///
    /// # Returns
    /// - `Ok(())` - Config is valid
    /// - `Err(GuildError::Validation)` - First violated constraint, described
    pub fn validate(&self) -> Result<(), GuildError> {
        if let Some(nickname) = &self.nickname {
            let length = nickname.chars().count();
            if length == 0 || length > MAX_NICKNAME_LENGTH {
                return Err(GuildError::Validation(format!(
                    "nickname must be between 1 and {} characters",
                    MAX_NICKNAME_LENGTH
                )));
            }
        }

        if let Some((id, level)) = self.levels.iter().find(|(_, level)| **level > MAX_LEVEL) {
            return Err(GuildError::Validation(format!(
                "level {} for {} exceeds the maximum of {}",
                level, id, MAX_LEVEL
            )));
        }

        if let Some(commands) = &self.commands {
            if commands.prefix.is_empty() || commands.prefix.chars().any(char::is_whitespace) {
                return Err(GuildError::Validation(
                    "command prefix must be non-empty and contain no whitespace".to_string(),
                ));
            }

            for command_override in &commands.overrides {
                if command_override.name.is_none() && command_override.plugin.is_none() {
                    return Err(GuildError::Validation(
                        "command override must name a command or a plugin".to_string(),
                    ));
                }
                if command_override.level.is_some_and(|level| level > MAX_LEVEL) {
                    return Err(GuildError::Validation(format!(
                        "command override level exceeds the maximum of {}",
                        MAX_LEVEL
                    )));
                }
            }
        }

        Ok(())
    }

    /// Level granted to a user or role id, `0` when unlisted.
    pub fn level_for(&self, id: u64) -> u8 {
        self.levels.get(&id).copied().unwrap_or(0)
    }
}
