use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use crate::{
    gateway::error::GatewayError,
    model::api::{parse_sharer_user_id, SHARER_USER_HEADER},
};

/// ID of the user a request is made on behalf of, read from `X-Sharer-User-Id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUser(pub i32);

impl<S> FromRequestParts<S> for SharerUser
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SHARER_USER_HEADER)
            .and_then(|value| value.to_str().ok());

        parse_sharer_user_id(value)
            .map(SharerUser)
            .map_err(GatewayError::BadRequest)
    }
}

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(GatewayError))]
pub struct GatewayJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(GatewayError))]
pub struct GatewayQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(GatewayError))]
pub struct GatewayPath<T>(pub T);
