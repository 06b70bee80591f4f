use std::path::PathBuf;

use tally_core::Action;
use tally_core::enums::Role;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not signed in, run `tally login`")]
    NotAuthenticated,

    #[error("a {role} account is not allowed to {action}")]
    Forbidden { action: Action, role: Role },

    #[error("home directory not found; cannot locate the session file")]
    NoHomeDir,

    #[error("session file {path} is unreadable: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
