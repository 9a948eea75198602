use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        booking::{ApprovalParams, BookingDto, BookingListParams, CreateBookingDto},
    },
    server::{
        error::AppError,
        middleware::{
            extract::{AppJson, AppPath, AppQuery},
            sharer::SharerUser,
        },
        model::booking::CreateBookingParams,
        service::booking::BookingService,
        state::AppState,
        util::page::parse_page,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Request a booking of an item.
///
/// # Returns
/// - `201 Created` - The booking, waiting for the owner's decision
/// - `400 Bad Request` - Invalid window or unavailable item
/// - `404 Not Found` - Unknown user or item, or the sharer user owns the item
#[utoipa::path(
    post,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Invalid booking data or item unavailable", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppJson(payload): AppJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .create(CreateBookingParams::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Approve or reject a waiting booking of the sharer user's item.
///
/// # Returns
/// - `200 OK` - The decided booking
/// - `400 Bad Request` - Booking already decided
/// - `404 Not Found` - Unknown booking, or the sharer user does not own the item
#[utoipa::path(
    patch,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        ("approved" = bool, Query, description = "Whether to approve the booking")
    ),
    responses(
        (status = 200, description = "Booking decided", body = BookingDto),
        (status = 400, description = "Booking already decided", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide_booking(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppPath(booking_id): AppPath<i32>,
    AppQuery(params): AppQuery<ApprovalParams>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .decide(user_id, booking_id, params.approved)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Get a booking visible to the sharer user as booker or item owner.
#[utoipa::path(
    get,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppPath(booking_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .get(user_id, booking_id)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// List the sharer user's bookings, latest start first.
#[utoipa::path(
    get,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        ("state" = Option<String>, Query, description = "ALL, CURRENT, PAST, FUTURE, WAITING or REJECTED"),
        ("from" = Option<i64>, Query, description = "Index of the first booking"),
        ("size" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "The user's bookings", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booker_bookings(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppQuery(params): AppQuery<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let booking_state = params.state().map_err(AppError::BadRequest)?;
    let page = parse_page(params.page_params())?;

    let bookings = BookingService::new(&state.db)
        .get_by_booker(user_id, booking_state, page)
        .await?;

    let bookings: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings)))
}

/// List bookings of the sharer user's items, latest start first.
#[utoipa::path(
    get,
    path = "/bookings/owner",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        ("state" = Option<String>, Query, description = "ALL, CURRENT, PAST, FUTURE, WAITING or REJECTED"),
        ("from" = Option<i64>, Query, description = "Index of the first booking"),
        ("size" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Bookings of the user's items", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_bookings(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppQuery(params): AppQuery<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let booking_state = params.state().map_err(AppError::BadRequest)?;
    let page = parse_page(params.page_params())?;

    let bookings = BookingService::new(&state.db)
        .get_by_owner(user_id, booking_state, page)
        .await?;

    let bookings: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings)))
}
