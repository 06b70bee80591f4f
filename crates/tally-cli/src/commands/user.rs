use serde::Serialize;
use tally_core::Action;
use tally_core::entities::User;
use tally_core::enums::Role;
use tally_core::payloads::{NewUser, UserUpdate};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{output, output_list};

#[derive(Serialize)]
struct UserRow<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    role: Role,
}

#[derive(Serialize)]
struct Deleted<'a> {
    deleted: &'a str,
}

/// Handle `tally user`.
pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::List { limit } => {
            ctx.require(Action::ManageUsers)?;
            let mut users = ctx.api.list_users().await?;
            apply_limit(
                &mut users,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output_list(&users, flags.format, |user| UserRow {
                id: &user.id,
                name: &user.name,
                email: &user.email,
                role: user.role,
            })
        }
        UserCommands::Create {
            name,
            email,
            password,
            role,
        } => {
            let role: Role = parse_enum(role, "role")?;
            require_role_change(ctx, role)?;
            let user = ctx
                .api
                .create_user(&NewUser {
                    name: name.clone(),
                    email: email.clone(),
                    password: password.clone(),
                    role,
                })
                .await?;
            output(&user, flags.format)
        }
        UserCommands::Update {
            id,
            name,
            email,
            role,
            password,
        } => {
            let role = role
                .as_deref()
                .map(|role| parse_enum::<Role>(role, "role"))
                .transpose()?;
            match role {
                Some(role) => require_role_change(ctx, role)?,
                None => {
                    ctx.require(Action::ManageUsers)?;
                }
            }
            let target = ctx.api.get_user(id).await?;
            require_target(ctx, &target)?;
            let user = ctx
                .api
                .update_user(
                    id,
                    &UserUpdate {
                        name: name.clone(),
                        email: email.clone(),
                        role,
                        password: password.clone(),
                    },
                )
                .await?;
            output(&user, flags.format)
        }
        UserCommands::Delete { id } => {
            let session = ctx.require(Action::ManageUsers)?;
            if session.user.id == *id {
                anyhow::bail!("refusing to delete the signed-in account");
            }
            let target = ctx.api.get_user(id).await?;
            require_target(ctx, &target)?;
            ctx.api.delete_user(id).await?;
            output(&Deleted { deleted: id }, flags.format)
        }
    }
}

/// Granting `SUPER_ADMIN` needs the stronger capability.
fn require_role_change(ctx: &AppContext, role: Role) -> anyhow::Result<()> {
    ctx.require(Action::ManageUsers)?;
    if role == Role::SuperAdmin {
        ctx.require(Action::ManageAdmins)?;
    }
    Ok(())
}

/// Editing or deleting a `SUPER_ADMIN` account needs the stronger capability.
fn require_target(ctx: &AppContext, target: &User) -> anyhow::Result<()> {
    ctx.require(Action::ManageUsers)?;
    if target.role == Role::SuperAdmin {
        ctx.require(Action::ManageAdmins)?;
    }
    Ok(())
}
