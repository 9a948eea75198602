use axum::extract::State;

use crate::{
    gateway::{
        client::Forwarded,
        error::GatewayError,
        extract::{GatewayJson, GatewayPath},
        state::GatewayState,
        validate,
    },
    model::user::{CreateUserDto, UpdateUserDto},
};

pub async fn create_user(
    State(state): State<GatewayState>,
    GatewayJson(payload): GatewayJson<CreateUserDto>,
) -> Result<Forwarded, GatewayError> {
    validate::new_user(&payload)?;

    state.client.create_user(&payload).await
}

pub async fn update_user(
    State(state): State<GatewayState>,
    GatewayPath(user_id): GatewayPath<i32>,
    GatewayJson(payload): GatewayJson<UpdateUserDto>,
) -> Result<Forwarded, GatewayError> {
    validate::user_update(&payload)?;

    state.client.update_user(user_id, &payload).await
}

pub async fn get_user(
    State(state): State<GatewayState>,
    GatewayPath(user_id): GatewayPath<i32>,
) -> Result<Forwarded, GatewayError> {
    state.client.get_user(user_id).await
}

pub async fn get_users(State(state): State<GatewayState>) -> Result<Forwarded, GatewayError> {
    state.client.get_users().await
}

pub async fn delete_user(
    State(state): State<GatewayState>,
    GatewayPath(user_id): GatewayPath<i32>,
) -> Result<Forwarded, GatewayError> {
    state.client.delete_user(user_id).await
}
