use serde::de::DeserializeOwned;
use tally_core::dates::require_iso_date;

/// Parse a `SCREAMING_SNAKE_CASE` enum value from friendlier CLI input
/// (`in-progress`, `super_admin`, `Done`).
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Validate a `YYYY-MM-DD` argument and return it unchanged.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<String> {
    require_iso_date(raw)
        .map(|_| raw.to_string())
        .map_err(|error| anyhow::anyhow!("invalid {field}: {error}"))
}
