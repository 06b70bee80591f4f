//! General display configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

fn default_date_format() -> String {
    "%b %d, %Y".to_string()
}

/// First column of the calendar month grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// chrono pattern used to display due dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub week_start: WeekStart,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            date_format: default_date_format(),
            week_start: WeekStart::default(),
        }
    }
}
