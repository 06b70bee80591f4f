use anyhow::Context;
use tally_config::TallyConfig;
use tally_session::SessionStore;

/// Load `.env`, config files, and `TALLY_*` overrides.
pub fn load_config() -> anyhow::Result<TallyConfig> {
    TallyConfig::load_with_dotenv().context("failed to load tally configuration")
}

/// Locate the session file, honoring `session.path` from config.
pub fn session_store(config: &TallyConfig) -> anyhow::Result<SessionStore> {
    SessionStore::resolve(config.session.path_override()).map_err(anyhow::Error::from)
}
