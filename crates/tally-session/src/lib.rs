//! # tally-session
//!
//! The signed-in user's session, loaded once at startup and handed to every
//! command as an explicit value.
//!
//! The session lives in a JSON file (`~/.tally/session.json` by default)
//! written with owner-only permissions on unix.

pub mod error;
pub mod store;

pub use error::SessionError;
pub use store::SessionStore;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tally_core::entities::User;
use tally_core::{Action, can};

/// An authenticated user plus the bearer token the API issued for them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
            created_at: Utc::now(),
        }
    }

    /// Whether the session user may perform `action`.
    #[must_use]
    pub const fn can(&self, action: Action) -> bool {
        can(self.user.role, action)
    }

    /// Fail with [`SessionError::Forbidden`] unless the user may perform
    /// `action`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Forbidden`] naming the action and role.
    pub fn require(&self, action: Action) -> Result<(), SessionError> {
        if self.can(action) {
            Ok(())
        } else {
            Err(SessionError::Forbidden {
                action,
                role: self.user.role,
            })
        }
    }
}
