//! User store
//!
//! An ordered sequence of records. Insertion order is preserved and every
//! lookup is a linear scan. Ids are not unique: lookups and updates act on
//! the first match, deletes remove every match.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{UserError, UserResult};
use super::user::User;

/// Storage for user records
pub trait UserRepository: Send + Sync {
    /// Append a record unconditionally
    fn insert(&self, user: User) -> UserResult<User>;

    /// All records in insertion order
    fn list(&self) -> UserResult<Vec<User>>;

    /// First record with `id`, in insertion order
    fn find_first(&self, id: i64) -> UserResult<Option<User>>;

    /// Overwrite `name` and `age` of the first record with `id`
    fn update_first(&self, id: i64, replacement: &User) -> UserResult<Option<User>>;

    /// Remove every record with `id`, returning how many were removed
    fn delete_all(&self, id: i64) -> UserResult<usize>;
}

/// In-memory user repository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> UserResult<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| UserError::StorageError("Lock poisoned".to_string()))
    }

    fn write(&self) -> UserResult<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| UserError::StorageError("Lock poisoned".to_string()))
    }
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&self, user: User) -> UserResult<User> {
        let mut users = self.write()?;
        users.push(user.clone());
        Ok(user)
    }

    fn list(&self) -> UserResult<Vec<User>> {
        Ok(self.read()?.clone())
    }

    fn find_first(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.read()?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    fn update_first(&self, id: i64, replacement: &User) -> UserResult<Option<User>> {
        let mut users = self.write()?;

        Ok(users.iter_mut().find(|u| u.id == id).map(|existing| {
            existing.apply_update(replacement);
            existing.clone()
        }))
    }

    fn delete_all(&self, id: i64) -> UserResult<usize> {
        let mut users = self.write()?;

        let len_before = users.len();
        users.retain(|u| u.id != id);

        Ok(len_before - users.len())
    }
}
