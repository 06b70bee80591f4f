//! Session file location and token override.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session file path. Empty means `~/.tally/session.json`.
    #[serde(default)]
    pub path: String,

    /// Bearer token that overrides the stored session's token (CI use).
    #[serde(default)]
    pub token: String,
}

impl SessionConfig {
    #[must_use]
    pub fn path_override(&self) -> Option<&str> {
        (!self.path.is_empty()).then_some(self.path.as_str())
    }

    #[must_use]
    pub fn token_override(&self) -> Option<&str> {
        (!self.token.is_empty()).then_some(self.token.as_str())
    }
}
