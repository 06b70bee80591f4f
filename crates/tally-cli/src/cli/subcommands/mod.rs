pub mod brand;
pub mod permission;
pub mod project;
pub mod task;
pub mod time;
pub mod user;

pub use brand::BrandCommands;
pub use permission::PermissionCommands;
pub use project::ProjectCommands;
pub use task::TaskCommands;
pub use time::TimeCommands;
pub use user::UserCommands;
