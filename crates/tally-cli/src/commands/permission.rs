use serde::Serialize;
use tally_core::Action;
use tally_core::enums::PermissionLevel;
use tally_core::payloads::NewPermission;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PermissionCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{output, output_list};

#[derive(Serialize)]
struct PermissionRow<'a> {
    id: &'a str,
    user: &'a str,
    project_id: &'a str,
    level: PermissionLevel,
}

#[derive(Serialize)]
struct Revoked<'a> {
    revoked: &'a str,
}

/// Handle `tally permission`.
pub async fn handle(
    action: &PermissionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require(Action::AssignPermissions)?;

    match action {
        PermissionCommands::List { user } => {
            let permissions = ctx.api.list_permissions(user.as_deref()).await?;
            output_list(&permissions, flags.format, |permission| PermissionRow {
                id: &permission.id,
                user: permission
                    .user
                    .as_ref()
                    .map_or(permission.user_id.as_str(), |user| user.name.as_str()),
                project_id: &permission.project_id,
                level: permission.level,
            })
        }
        PermissionCommands::Grant {
            user,
            project,
            level,
        } => {
            let permission = ctx
                .api
                .grant_permission(&NewPermission {
                    user_id: user.clone(),
                    project_id: project.clone(),
                    level: parse_enum(level, "level")?,
                })
                .await?;
            output(&permission, flags.format)
        }
        PermissionCommands::Revoke { id } => {
            ctx.api.revoke_permission(id).await?;
            output(&Revoked { revoked: id }, flags.format)
        }
    }
}
