use schemars::schema_for;
use tally_core::entities::{Brand, Permission, Project, Task, TimeEntry, User};
use tally_session::Session;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPE_NAMES: &str = "task, user, brand, project, time-entry, permission, session";

/// Handle `tally schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_value(&args.type_name)?, flags.format)
}

fn schema_value(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "task" => schema_for!(Task),
        "user" => schema_for!(User),
        "brand" => schema_for!(Brand),
        "project" => schema_for!(Project),
        "time-entry" => schema_for!(TimeEntry),
        "permission" => schema_for!(Permission),
        "session" => schema_for!(Session),
        _ => anyhow::bail!("unknown schema type '{type_name}' (expected one of: {TYPE_NAMES})"),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::schema_value;

    #[test]
    fn task_schema_lists_status_values() {
        let schema = schema_value("task").expect("task schema");
        let rendered = schema.to_string();
        assert!(rendered.contains("IN_PROGRESS"));
        assert!(rendered.contains("estimatedHours"));
    }

    #[test]
    fn accepts_snake_case_names() {
        assert!(schema_value("time_entry").is_ok());
    }

    #[test]
    fn unknown_type_lists_choices() {
        let err = schema_value("invoice").unwrap_err();
        assert!(err.to_string().contains("time-entry"));
    }
}
