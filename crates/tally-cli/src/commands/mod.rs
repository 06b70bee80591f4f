pub mod auth;
pub mod brand;
pub mod dispatch;
pub mod permission;
pub mod project;
pub mod schema;
pub mod shared;
pub mod task;
pub mod time;
pub mod user;
