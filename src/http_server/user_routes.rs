//! User HTTP Routes
//!
//! CRUD endpoints over the in-memory user store.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::errors::{ApiError, MessageResponse};
use super::extract::{UserIdPath, ValidatedUser};
use crate::users::{InMemoryUserRepository, User, UserService};

// ==================
// Shared State
// ==================

/// User state shared across handlers
pub struct UsersState {
    pub service: UserService<InMemoryUserRepository>,
}

impl UsersState {
    pub fn new() -> Self {
        Self {
            service: UserService::new(InMemoryUserRepository::new()),
        }
    }
}

impl Default for UsersState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// User Routes
// ==================

/// Create user routes
pub fn user_routes(state: Arc<UsersState>) -> Router {
    Router::new()
        .route("/users/", get(list_users_handler).post(create_user_handler))
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{user_id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_user_handler(
    State(state): State<Arc<UsersState>>,
    ValidatedUser(user): ValidatedUser,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.service.create(user)?))
}

async fn list_users_handler(
    State(state): State<Arc<UsersState>>,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.service.list()?))
}

async fn get_user_handler(
    State(state): State<Arc<UsersState>>,
    UserIdPath(user_id): UserIdPath,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.service.get(user_id)?))
}

async fn update_user_handler(
    State(state): State<Arc<UsersState>>,
    UserIdPath(user_id): UserIdPath,
    ValidatedUser(replacement): ValidatedUser,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.service.update(user_id, &replacement)?))
}

async fn delete_user_handler(
    State(state): State<Arc<UsersState>>,
    UserIdPath(user_id): UserIdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete(user_id)?;
    Ok(Json(MessageResponse::new("User deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_state_starts_empty() {
        let state = UsersState::new();
        assert!(state.service.list().unwrap().is_empty());
    }
}
