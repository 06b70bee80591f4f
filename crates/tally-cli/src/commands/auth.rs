use anyhow::Context;
use serde::Serialize;
use tally_api::ApiClient;
use tally_config::TallyConfig;
use tally_core::Action;
use tally_core::enums::Role;
use tally_session::{Session, SessionStore};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct LoginResponse {
    authenticated: bool,
    user_id: String,
    name: String,
    role: Role,
    session_path: String,
}

#[derive(Serialize)]
struct LogoutResponse {
    signed_out: bool,
}

#[derive(Serialize)]
struct WhoamiResponse {
    id: String,
    name: String,
    email: String,
    role: Role,
    signed_in_at: String,
    allowed: Vec<&'static str>,
}

/// Handle `tally login`.
pub async fn login(
    args: &LoginArgs,
    config: &TallyConfig,
    store: &SessionStore,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let api = ApiClient::new(&config.api)?;

    let progress = Progress::spinner("Signing in");
    let result = api.login(&args.email, &args.password).await;
    progress.finish_clear();
    let login = result.context("login failed")?;

    let session = Session::new(login.token, login.user);
    store.save(&session)?;
    tracing::debug!(user = %session.user.id, "signed in");

    output(
        &LoginResponse {
            authenticated: true,
            user_id: session.user.id,
            name: session.user.name,
            role: session.user.role,
            session_path: store.path().display().to_string(),
        },
        flags.format,
    )
}

/// Handle `tally logout`.
pub fn logout(store: &SessionStore, flags: &GlobalFlags) -> anyhow::Result<()> {
    let signed_out = store.clear()?;
    output(&LogoutResponse { signed_out }, flags.format)
}

/// Handle `tally whoami`.
pub fn whoami(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session()?;
    output(
        &WhoamiResponse {
            id: session.user.id.clone(),
            name: session.user.name.clone(),
            email: session.user.email.clone(),
            role: session.user.role,
            signed_in_at: session.created_at.to_rfc3339(),
            allowed: allowed_actions(session),
        },
        flags.format,
    )
}

fn allowed_actions(session: &Session) -> Vec<&'static str> {
    Action::ALL
        .into_iter()
        .filter(|action| session.can(*action))
        .map(Action::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use tally_core::entities::User;

    use super::*;

    fn session(role: Role) -> Session {
        Session::new(
            "tok",
            User {
                id: "u1".into(),
                name: "Ana".into(),
                email: "ana@example.com".into(),
                role,
                created_at: None,
            },
        )
    }

    #[test]
    fn plain_user_sees_only_task_actions() {
        assert_eq!(
            allowed_actions(&session(Role::User)),
            vec![
                "view the board",
                "create tasks",
                "edit tasks",
                "change task status",
                "log time"
            ]
        );
    }

    #[test]
    fn super_admin_sees_everything() {
        assert_eq!(allowed_actions(&session(Role::SuperAdmin)).len(), Action::ALL.len());
    }
}
