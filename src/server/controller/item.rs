use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto},
        item::{CreateItemDto, ItemDto, ItemWithBookingsDto, SearchParams, UpdateItemDto},
        page::PageParams,
    },
    server::{
        error::AppError,
        middleware::{
            extract::{AppJson, AppPath, AppQuery},
            sharer::SharerUser,
        },
        model::{
            comment::CreateCommentParams,
            item::{CreateItemParams, UpdateItemParams},
        },
        service::item::ItemService,
        state::AppState,
        util::page::parse_page,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

/// List a new item for the sharer user.
///
/// # Returns
/// - `201 Created` - The created item
/// - `400 Bad Request` - Missing name, description or availability
/// - `404 Not Found` - Unknown user or item request
#[utoipa::path(
    post,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Successfully created item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 404, description = "User or item request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppJson(payload): AppJson<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service
        .create(CreateItemParams::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Update an item owned by the sharer user.
///
/// # Returns
/// - `200 OK` - The updated item
/// - `403 Forbidden` - Sharer user does not own the item
/// - `404 Not Found` - Unknown item
#[utoipa::path(
    patch,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 403, description = "User is not the owner", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppPath(item_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service
        .update(UpdateItemParams::from_dto(item_id, user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Get an item with its comments.
///
/// The last and next bookings are included only when the sharer user owns the item.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "The item", body = ItemWithBookingsDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppPath(item_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db).get(user_id, item_id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// List the sharer user's items ordered by ID.
#[utoipa::path(
    get,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID"),
        ("from" = Option<i64>, Query, description = "Index of the first item"),
        ("size" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "The user's items", body = Vec<ItemWithBookingsDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_items(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = parse_page(params)?;

    let items = ItemService::new(&state.db)
        .get_by_owner(user_id, page)
        .await?;

    let items: Vec<ItemWithBookingsDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// Search available items by name or description.
///
/// Matching is case-insensitive; blank text returns an empty list.
#[utoipa::path(
    get,
    path = "/items/search",
    tag = ITEM_TAG,
    params(
        ("text" = String, Query, description = "Text to look for"),
        ("from" = Option<i64>, Query, description = "Index of the first item"),
        ("size" = Option<i64>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Matching items", body = Vec<ItemDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_items(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = parse_page(PageParams {
        from: params.from,
        size: params.size,
    })?;

    let items = ItemService::new(&state.db)
        .search(&params.text, page)
        .await?;

    let items: Vec<ItemDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// Comment on an item the sharer user has finished booking.
///
/// # Returns
/// - `200 OK` - The created comment
/// - `400 Bad Request` - Blank text or no finished approved booking
/// - `404 Not Found` - Unknown user or item
#[utoipa::path(
    post,
    path = "/items/{item_id}/comment",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "User has not finished a booking of the item", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    SharerUser(user_id): SharerUser,
    AppPath(item_id): AppPath<i32>,
    AppJson(payload): AppJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = ItemService::new(&state.db)
        .add_comment(CreateCommentParams {
            item_id,
            author_id: user_id,
            text: payload.text,
        })
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}
