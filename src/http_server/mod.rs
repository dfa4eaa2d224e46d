//! # HTTP Server Module
//!
//! Axum server exposing the user store.
//!
//! # Endpoints
//!
//! - `GET /` - Greeting
//! - `GET /health` - Health check
//! - `POST /users/`, `GET /users/` - Create and list
//! - `GET|PUT|DELETE /users/{user_id}` - Get, update and delete by id

pub mod config;
pub mod errors;
pub mod extract;
pub mod root_routes;
pub mod server;
pub mod user_routes;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ErrorResponse, MessageResponse};
pub use server::HttpServer;
pub use user_routes::UsersState;
