//! Host-tunable defaults for command builders
//!
//! `Settings` holds the message templates a builder starts from. Defaults
//! match the stock behavior, so a host that never loads settings sees the
//! same messages as one that loads an empty file.
//!
//! ```
//! use cmdtree_core::Settings;
//!
//! let settings = Settings::from_toml_str(r#"
//!     not_player_message = "Players only."
//! "#).unwrap();
//!
//! assert_eq!(settings.not_player_message, "Players only.");
//! assert_eq!(settings.usage, "/<command>");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::SettingsError;

/// Literal substring of a usage template replaced by the invocation label
pub const USAGE_PLACEHOLDER: &str = "<command>";

/// Usage template used when a builder sets none
pub const DEFAULT_USAGE: &str = "/<command>";

/// Sent when the permission or predicate guard rejects a sender
pub const DEFAULT_PERMISSION_MESSAGE: &str = "You do not have permission to use this command.";

/// Sent when a player-only command is invoked by a non-player
pub const DEFAULT_NOT_PLAYER_MESSAGE: &str = "Sorry, but you aren't a player.";

/// Builder defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Usage template; `<command>` is replaced by the invocation label
    pub usage: String,
    /// Denial message for permission and predicate failures
    pub permission_message: String,
    /// Message for player-only commands invoked by non-players
    pub not_player_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            usage: DEFAULT_USAGE.to_string(),
            permission_message: DEFAULT_PERMISSION_MESSAGE.to_string(),
            not_player_message: DEFAULT_NOT_PLAYER_MESSAGE.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Parse` for malformed TOML, wrongly typed
    /// values, or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }
}
