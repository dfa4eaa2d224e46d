//! # User Service
//!
//! The five user operations on top of a [`UserRepository`]. Turns "no
//! match" into [`UserError::NotFound`] so the transport never has to
//! guess a response shape.

use tracing::{debug, info};

use super::errors::{UserError, UserResult};
use super::repository::UserRepository;
use super::user::User;

/// User operations over a repository
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Append `user` to the store and echo it back.
    pub fn create(&self, user: User) -> UserResult<User> {
        let user = self.repo.insert(user)?;
        info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// All users in insertion order.
    pub fn list(&self) -> UserResult<Vec<User>> {
        let users = self.repo.list()?;
        debug!(count = users.len(), "users listed");
        Ok(users)
    }

    /// First user with `id`.
    pub fn get(&self, id: i64) -> UserResult<User> {
        self.repo.find_first(id)?.ok_or(UserError::NotFound(id))
    }

    /// Replace `name` and `age` of the first user with `id`.
    ///
    /// The `id` carried by `replacement` is ignored.
    pub fn update(&self, id: i64, replacement: &User) -> UserResult<User> {
        let user = self
            .repo
            .update_first(id, replacement)?
            .ok_or(UserError::NotFound(id))?;
        info!(user_id = id, "user updated");
        Ok(user)
    }

    /// Remove every user with `id`. Succeeds whether or not any matched.
    pub fn delete(&self, id: i64) -> UserResult<usize> {
        let removed = self.repo.delete_all(id)?;
        info!(user_id = id, removed, "user delete applied");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repository::InMemoryUserRepository;

    fn service() -> UserService<InMemoryUserRepository> {
        UserService::new(InMemoryUserRepository::new())
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let svc = service();
        assert!(matches!(svc.get(1), Err(UserError::NotFound(1))));
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let svc = service();
        let result = svc.update(3, &User::new(3, "X", 1));
        assert!(matches!(result, Err(UserError::NotFound(3))));
        assert!(svc.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_echoes_record() {
        let svc = service();
        let created = svc.create(User::new(1, "Alice", 30)).unwrap();
        assert_eq!(created, User::new(1, "Alice", 30));
        assert_eq!(svc.get(1).unwrap(), created);
    }

    #[test]
    fn test_delete_reports_removed_count() {
        let svc = service();
        svc.create(User::new(4, "a", 1)).unwrap();
        svc.create(User::new(4, "b", 2)).unwrap();
        assert_eq!(svc.delete(4).unwrap(), 2);
        assert_eq!(svc.delete(4).unwrap(), 0);
    }
}
