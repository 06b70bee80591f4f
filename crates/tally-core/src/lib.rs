//! # tally-core
//!
//! Core types shared across all Tally crates:
//! - Entity structs for the REST resources (brands, projects, tasks, users,
//!   permissions, time entries)
//! - Create/update payloads with client-side validation
//! - Closed enums for task status, user role, and permission level
//! - The central role → action capability check
//! - Lenient ISO date parsing and display formatting

pub mod capability;
pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod payloads;

pub use capability::{Action, can};
pub use errors::CoreError;
