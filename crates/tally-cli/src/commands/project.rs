use serde::Serialize;
use tally_core::Action;
use tally_core::payloads::{NewProject, ProjectUpdate};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::{output, output_list};

#[derive(Serialize)]
struct ProjectRow<'a> {
    id: &'a str,
    name: &'a str,
    brand: &'a str,
    tasks: u32,
}

#[derive(Serialize)]
struct Deleted<'a> {
    deleted: &'a str,
}

/// Handle `tally project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List { brand, limit } => {
            ctx.require(Action::ViewBoard)?;
            let mut projects = ctx.api.list_projects(brand.as_deref()).await?;
            apply_limit(
                &mut projects,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output_list(&projects, flags.format, |project| ProjectRow {
                id: &project.id,
                name: &project.name,
                brand: project
                    .brand
                    .as_ref()
                    .map_or(project.brand_id.as_str(), |brand| brand.name.as_str()),
                tasks: project.count.tasks,
            })
        }
        ProjectCommands::Create {
            name,
            brand,
            description,
        } => {
            ctx.require(Action::ManageProjects)?;
            let project = ctx
                .api
                .create_project(&NewProject {
                    name: name.clone(),
                    description: description.clone(),
                    brand_id: brand.clone(),
                })
                .await?;
            output(&project, flags.format)
        }
        ProjectCommands::Update {
            id,
            name,
            description,
            brand,
        } => {
            ctx.require(Action::ManageProjects)?;
            let project = ctx
                .api
                .update_project(
                    id,
                    &ProjectUpdate {
                        name: name.clone(),
                        description: description.clone(),
                        brand_id: brand.clone(),
                    },
                )
                .await?;
            output(&project, flags.format)
        }
        ProjectCommands::Delete { id } => {
            ctx.require(Action::ManageProjects)?;
            ctx.api.delete_project(id).await?;
            output(&Deleted { deleted: id }, flags.format)
        }
    }
}
