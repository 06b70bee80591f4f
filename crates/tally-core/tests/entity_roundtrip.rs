//! Serde roundtrip and JsonSchema validation tests for the entity types.

use schemars::schema_for;
use tally_core::entities::*;
use tally_core::enums::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn ana() -> UserSummary {
    UserSummary {
        id: "u1".into(),
        name: "Ana".into(),
        email: "ana@example.com".into(),
    }
}

roundtrip_and_validate!(
    task_roundtrip,
    Task,
    Task {
        id: "t1".into(),
        title: "Draft launch brief".into(),
        description: Some("One pager for the spring campaign.".into()),
        status: TaskStatus::InProgress,
        estimated_hours: Some(4.5),
        due_date: Some("2025-04-01".into()),
        project_id: Some("p1".into()),
        assigned_user: Some(ana()),
        created_by_user: Some(ana()),
        count: TaskCounts { time_entries: 2 },
    }
);

roundtrip_and_validate!(
    minimal_task_roundtrip,
    Task,
    Task {
        id: "t2".into(),
        title: "Untriaged".into(),
        description: None,
        status: TaskStatus::Todo,
        estimated_hours: None,
        due_date: None,
        project_id: None,
        assigned_user: None,
        created_by_user: None,
        count: TaskCounts::default(),
    }
);

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User {
        id: "u1".into(),
        name: "Ana".into(),
        email: "ana@example.com".into(),
        role: Role::Admin,
        created_at: None,
    }
);

roundtrip_and_validate!(
    brand_roundtrip,
    Brand,
    Brand {
        id: "b1".into(),
        name: "Northwind".into(),
        description: None,
        created_at: None,
        count: BrandCounts { projects: 3 },
    }
);

roundtrip_and_validate!(
    project_roundtrip,
    Project,
    Project {
        id: "p1".into(),
        name: "Spring campaign".into(),
        description: Some("Q2 push".into()),
        brand_id: "b1".into(),
        brand: Some(ProjectBrand {
            id: "b1".into(),
            name: "Northwind".into(),
        }),
        created_at: None,
        count: ProjectCounts { tasks: 12 },
    }
);

roundtrip_and_validate!(
    time_entry_roundtrip,
    TimeEntry,
    TimeEntry {
        id: "e1".into(),
        task_id: "t1".into(),
        user_id: "u1".into(),
        hours: 1.75,
        date: "2025-03-05".into(),
        description: Some("Kickoff call".into()),
        user: Some(ana()),
    }
);

roundtrip_and_validate!(
    permission_roundtrip,
    Permission,
    Permission {
        id: "perm1".into(),
        user_id: "u1".into(),
        project_id: "p1".into(),
        level: PermissionLevel::Edit,
        user: None,
    }
);

#[test]
fn task_with_unknown_status_fails_to_decode() {
    let raw = r#"{"id":"t9","title":"Legacy","status":"ARCHIVED"}"#;
    assert!(serde_json::from_str::<Task>(raw).is_err());
}
