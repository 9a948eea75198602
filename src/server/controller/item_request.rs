use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        page::PageParams,
        request::{CreateItemRequestDto, ItemRequestDto},
    },
    server::{
        error::AppError,
        middleware::{
            extract::{AppJson, AppPath, AppQuery},
            sharer::SharerUser,
        },
        model::item_request::CreateItemRequestParams,
        service::item_request::ItemRequestService,
        state::AppState,
        util::page::parse_page,
    },
};

/// Tag for grouping item request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

/// Ask for an item nobody has listed yet.
///
/// # Returns
/// - `201 Created` - The created request
/// - `400 Bad Request` - Blank description
/// - `404 Not Found` - Unknown user
#[utoipa::path(
    post,
    path = "/requests",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = CreateItemRequestDto,
    responses(
        (status = 201, description = "Successfully created request", body = ItemRequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppJson(payload): AppJson<CreateItemRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let request = ItemRequestService::new(&state.db)
        .create(CreateItemRequestParams {
            requester_id: user_id,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// List the sharer user's own requests, newest first.
#[utoipa::path(
    get,
    path = "/requests",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "The user's requests", body = Vec<ItemRequestDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_requests(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
) -> Result<impl IntoResponse, AppError> {
    let requests = ItemRequestService::new(&state.db).get_own(user_id).await?;

    let requests: Vec<ItemRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(requests)))
}

/// List requests made by other users, newest first.
#[utoipa::path(
    get,
    path = "/requests/all",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        ("from" = Option<i64>, Query, description = "Index of the first request"),
        ("size" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Other users' requests", body = Vec<ItemRequestDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_requests(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = parse_page(params)?;

    let requests = ItemRequestService::new(&state.db)
        .get_all(user_id, page)
        .await?;

    let requests: Vec<ItemRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(requests)))
}

#[utoipa::path(
    get,
    path = "/requests/{request_id}",
    tag = REQUEST_TAG,
    params(
        ("request_id" = i32, Path, description = "Item request ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "The request with its items", body = ItemRequestDto),
        (status = 404, description = "User or request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppPath(request_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let request = ItemRequestService::new(&state.db)
        .get(user_id, request_id)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}
