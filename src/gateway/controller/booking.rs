use axum::extract::State;
use chrono::Utc;

use crate::{
    gateway::{
        client::Forwarded,
        error::GatewayError,
        extract::{GatewayJson, GatewayPath, GatewayQuery, SharerUser},
        state::GatewayState,
        validate,
    },
    model::booking::{ApprovalParams, BookingListParams, CreateBookingDto},
};

pub async fn create_booking(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayJson(payload): GatewayJson<CreateBookingDto>,
) -> Result<Forwarded, GatewayError> {
    validate::new_booking(&payload, Utc::now().naive_utc())?;

    state.client.create_booking(user_id, &payload).await
}

pub async fn decide_booking(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayPath(booking_id): GatewayPath<i32>,
    GatewayQuery(params): GatewayQuery<ApprovalParams>,
) -> Result<Forwarded, GatewayError> {
    state
        .client
        .decide_booking(user_id, booking_id, params.approved)
        .await
}

pub async fn get_booking(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayPath(booking_id): GatewayPath<i32>,
) -> Result<Forwarded, GatewayError> {
    state.client.get_booking(user_id, booking_id).await
}

pub async fn get_booker_bookings(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayQuery(params): GatewayQuery<BookingListParams>,
) -> Result<Forwarded, GatewayError> {
    validate::booking_list(&params)?;

    state.client.get_booker_bookings(user_id, &params).await
}

pub async fn get_owner_bookings(
    State(state): State<GatewayState>,
    SharerUser(user_id): SharerUser,
    GatewayQuery(params): GatewayQuery<BookingListParams>,
) -> Result<Forwarded, GatewayError> {
    validate::booking_list(&params)?;

    state.client.get_owner_bookings(user_id, &params).await
}
