use anyhow::Context;
use tally_api::ApiClient;
use tally_config::TallyConfig;
use tally_core::Action;
use tally_session::{Session, SessionError, SessionStore};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: TallyConfig,
    pub store: SessionStore,
    pub session: Option<Session>,
    pub api: ApiClient,
}

impl AppContext {
    /// Load the session and build an API client carrying its token.
    ///
    /// A `session.token` override always wins over the stored session and is
    /// exchanged for its own user via the API, so role checks run against the
    /// account the token belongs to.
    pub async fn init(config: TallyConfig, store: SessionStore) -> anyhow::Result<Self> {
        let stored = store
            .load()
            .with_context(|| format!("failed to read session from {}", store.path().display()))?;
        let anonymous = ApiClient::new(&config.api).context("failed to build API client")?;

        let session = match config.session.token_override() {
            Some(token) => {
                tracing::debug!("resolving user for configured token");
                let user = anonymous
                    .clone()
                    .with_token(token)
                    .me()
                    .await
                    .context("configured session token was rejected")?;
                Some(Session::new(token, user))
            }
            None => stored,
        };

        let api = match &session {
            Some(session) => anonymous.with_token(session.token.as_str()),
            None => anonymous,
        };

        Ok(Self {
            config,
            store,
            session,
            api,
        })
    }

    /// The signed-in session, or a "run tally login" error.
    pub fn session(&self) -> anyhow::Result<&Session> {
        self.session
            .as_ref()
            .ok_or_else(|| SessionError::NotAuthenticated.into())
    }

    /// The signed-in session, provided its role allows `action`.
    pub fn require(&self, action: Action) -> anyhow::Result<&Session> {
        let session = self.session()?;
        session.require(action)?;
        Ok(session)
    }
}


#[cfg(test)]
impl AppContext {
    /// Context with a fixed session and a client that is never called.
    pub(crate) fn offline(session: Option<Session>) -> Self {
        let config = TallyConfig::default();
        Self {
            api: ApiClient::new(&config.api).unwrap(),
            store: SessionStore::new("/nonexistent/session.json"),
            config,
            session,
        }
    }
}
