//! User record
//!
//! The single entity held by the store. Identity is caller-supplied and
//! not unique; see [`crate::users::repository`] for how lookups resolve
//! duplicates.

use serde::{Deserialize, Serialize};

/// A user record as accepted and returned over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Overwrite mutable fields from `replacement`.
    ///
    /// `id` is identity and is never taken from the replacement.
    pub fn apply_update(&mut self, replacement: &User) {
        self.name = replacement.name.clone();
        self.age = replacement.age;
    }
}
