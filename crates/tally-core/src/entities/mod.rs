//! Entity types mirroring the REST API's JSON resources.
//!
//! Field names follow the API's camelCase wire form. Relation counts arrive
//! in a nested `_count` object.

mod brand;
mod permission;
mod project;
mod task;
mod time_entry;
mod user;

pub use brand::{Brand, BrandCounts};
pub use permission::Permission;
pub use project::{Project, ProjectBrand, ProjectCounts};
pub use task::{Task, TaskCounts};
pub use time_entry::{TimeEntry, UserHours, hours_by_user, total_hours};
pub use user::{User, UserSummary};
