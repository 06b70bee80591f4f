use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::Session;
use crate::error::SessionError;

const SESSION_DIR_NAME: &str = ".tally";
const SESSION_FILE_NAME: &str = "session.json";

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.tally/session.json`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoHomeDir`] when the home directory is unknown.
    pub fn default_location() -> Result<Self, SessionError> {
        dirs::home_dir()
            .map(|home| Self::new(home.join(SESSION_DIR_NAME).join(SESSION_FILE_NAME)))
            .ok_or(SessionError::NoHomeDir)
    }

    /// Use `path` when given, otherwise [`Self::default_location`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoHomeDir`] when no override is given and the
    /// home directory is unknown.
    pub fn resolve(path: Option<&str>) -> Result<Self, SessionError> {
        path.map_or_else(Self::default_location, |path| Ok(Self::new(path)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session. A missing file is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] when the file exists but cannot be read,
    /// or [`SessionError::Corrupt`] when it does not hold a session.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| SessionError::Corrupt {
                path: self.path.clone(),
                source,
            })
    }

    /// Write `session`, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the directory or file cannot be
    /// written.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let body = serde_json::to_string_pretty(session).map_err(|source| SessionError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, body).map_err(|source| self.io_error(source))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|source| self.io_error(source))?;
        }

        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Remove the session file. Returns whether a file was removed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool, SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
