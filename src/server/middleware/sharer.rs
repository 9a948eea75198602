use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    model::api::{parse_sharer_user_id, SHARER_USER_HEADER},
    server::error::AppError,
};

/// ID of the user a request is made on behalf of.
///
/// Extracted from the `X-Sharer-User-Id` header. A missing or non-numeric header is
/// rejected with 400 Bad Request before the handler runs. Whether the user exists is
/// checked by the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUser(pub i32);

impl<S> FromRequestParts<S> for SharerUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SHARER_USER_HEADER)
            .and_then(|value| value.to_str().ok());

        parse_sharer_user_id(value)
            .map(SharerUser)
            .map_err(AppError::BadRequest)
    }
}
