use axum::extract::State;

use crate::{
    gateway::{
        client::Forwarded,
        error::GatewayError,
        extract::{GatewayJson, GatewayPath, GatewayQuery, SharerUser},
        state::GatewayState,
        validate,
    },
    model::{page::PageParams, request::CreateItemRequestDto},
};

pub async fn create_request(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayJson(payload): GatewayJson<CreateItemRequestDto>,
) -> Result<Forwarded, GatewayError> {
    validate::item_request(&payload)?;

    state.client.create_request(user_id, &payload).await
}

pub async fn get_own_requests(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
) -> Result<Forwarded, GatewayError> {
    state.client.get_own_requests(user_id).await
}

pub async fn get_all_requests(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayQuery(params): GatewayQuery<PageParams>,
) -> Result<Forwarded, GatewayError> {
    validate::page(&params)?;

    state.client.get_all_requests(user_id, &params).await
}

pub async fn get_request(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayPath(request_id): GatewayPath<i32>,
) -> Result<Forwarded, GatewayError> {
    state.client.get_request(user_id, request_id).await
}
