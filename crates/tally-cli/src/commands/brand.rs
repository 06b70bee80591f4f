use serde::Serialize;
use tally_core::Action;
use tally_core::payloads::{BrandUpdate, NewBrand};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BrandCommands;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::{output, output_list};

#[derive(Serialize)]
struct BrandRow<'a> {
    id: &'a str,
    name: &'a str,
    projects: u32,
}

#[derive(Serialize)]
struct Deleted<'a> {
    deleted: &'a str,
}

/// Handle `tally brand`.
pub async fn handle(action: &BrandCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        BrandCommands::List { limit } => {
            ctx.require(Action::ViewBoard)?;
            let mut brands = ctx.api.list_brands().await?;
            apply_limit(
                &mut brands,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output_list(&brands, flags.format, |brand| BrandRow {
                id: &brand.id,
                name: &brand.name,
                projects: brand.count.projects,
            })
        }
        BrandCommands::Create { name, description } => {
            ctx.require(Action::ManageBrands)?;
            let brand = ctx
                .api
                .create_brand(&NewBrand {
                    name: name.clone(),
                    description: description.clone(),
                })
                .await?;
            output(&brand, flags.format)
        }
        BrandCommands::Update {
            id,
            name,
            description,
        } => {
            ctx.require(Action::ManageBrands)?;
            let brand = ctx
                .api
                .update_brand(
                    id,
                    &BrandUpdate {
                        name: name.clone(),
                        description: description.clone(),
                    },
                )
                .await?;
            output(&brand, flags.format)
        }
        BrandCommands::Delete { id } => {
            ctx.require(Action::ManageBrands)?;
            ctx.api.delete_brand(id).await?;
            output(&Deleted { deleted: id }, flags.format)
        }
    }
}
