use axum::extract::State;

use crate::{
    gateway::{
        client::Forwarded,
        error::GatewayError,
        extract::{GatewayJson, GatewayPath, GatewayQuery, SharerUser},
        state::GatewayState,
        validate,
    },
    model::{
        comment::CreateCommentDto,
        item::{CreateItemDto, SearchParams, UpdateItemDto},
        page::PageParams,
    },
};

pub async fn create_item(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayJson(payload): GatewayJson<CreateItemDto>,
) -> Result<Forwarded, GatewayError> {
    validate::new_item(&payload)?;

    state.client.create_item(user_id, &payload).await
}

/// Partial updates are checked by the server, which knows the stored values.
pub async fn update_item(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayPath(item_id): GatewayPath<i32>,
    GatewayJson(payload): GatewayJson<UpdateItemDto>,
) -> Result<Forwarded, GatewayError> {
    state.client.update_item(user_id, item_id, &payload).await
}

pub async fn get_item(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayPath(item_id): GatewayPath<i32>,
) -> Result<Forwarded, GatewayError> {
    state.client.get_item(user_id, item_id).await
}

pub async fn get_owner_items(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayQuery(params): GatewayQuery<PageParams>,
) -> Result<Forwarded, GatewayError> {
    validate::page(&params)?;

    state.client.get_owner_items(user_id, &params).await
}

/// Search is case-insensitive; the text is lower-cased before forwarding.
pub async fn search_items(
    State(state): State<GatewayState>,
    GatewayQuery(params): GatewayQuery<SearchParams>,
) -> Result<Forwarded, GatewayError> {
    validate::page(&PageParams {
        from: params.from,
        size: params.size,
    })?;

    let params = SearchParams {
        text: params.text.to_lowercase(),
        ..params
    };

    state.client.search_items(&params).await
}

pub async fn add_comment(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayPath(item_id): GatewayPath<i32>,
    GatewayJson(payload): GatewayJson<CreateCommentDto>,
) -> Result<Forwarded, GatewayError> {
    validate::comment(&payload)?;

    state.client.add_comment(user_id, item_id, &payload).await
}
