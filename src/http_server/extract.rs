//! Validating extractors
//!
//! Boundary validation runs here, before any handler body executes.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};

use super::errors::ApiError;
use crate::users::{parse_user, User, ValidationError};

/// Request body validated as a [`User`]
#[derive(Debug)]
pub struct ValidatedUser(pub User);

impl<S> FromRequest<S> for ValidatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        Ok(Self(parse_user(&body)?))
    }
}

/// `{user_id}` path segment parsed as an integer
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub i64);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::invalid_path_integer("user_id", &raw).into())
    }
}
