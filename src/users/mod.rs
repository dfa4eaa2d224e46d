//! # Users Module
//!
//! The user record, its boundary validation, the in-memory store and the
//! service exposing create/list/get/update/delete.
//!
//! # Design Notes
//!
//! - Ids are caller-supplied and not unique
//! - get/update act on the first match in insertion order
//! - delete removes every match and never fails for a missing id

pub mod errors;
pub mod repository;
pub mod service;
pub mod user;
pub mod validation;

pub use errors::{UserError, UserResult};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use user::User;
pub use validation::{parse_user, validate_user, FieldIssue, ValidationError};
