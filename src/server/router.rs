use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, BookingShortDto, BookingStatusDto, CreateBookingDto},
        comment::{CommentDto, CreateCommentDto},
        item::{CreateItemDto, ItemDto, ItemWithBookingsDto, UpdateItemDto},
        request::{CreateItemRequestDto, ItemRequestDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{
            booking::{
                self, create_booking, decide_booking, get_booker_bookings, get_booking,
                get_owner_bookings,
            },
            item::{
                self, add_comment, create_item, get_item, get_owner_items, search_items,
                update_item,
            },
            item_request::{
                self, create_request, get_all_requests, get_own_requests, get_request,
            },
            user::{self, create_user, delete_user, get_user, get_users, update_user},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "ShareIt", description = "Item sharing service API"),
    paths(
        user::create_user,
        user::update_user,
        user::get_user,
        user::get_users,
        user::delete_user,
        item::create_item,
        item::update_item,
        item::get_item,
        item::get_owner_items,
        item::search_items,
        item::add_comment,
        booking::create_booking,
        booking::decide_booking,
        booking::get_booking,
        booking::get_booker_bookings,
        booking::get_owner_bookings,
        item_request::create_request,
        item_request::get_own_requests,
        item_request::get_all_requests,
        item_request::get_request,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        ItemDto,
        CreateItemDto,
        UpdateItemDto,
        ItemWithBookingsDto,
        CommentDto,
        CreateCommentDto,
        BookingDto,
        BookingShortDto,
        BookingStatusDto,
        CreateBookingDto,
        ItemRequestDto,
        CreateItemRequestDto,
    )),
    tags(
        (name = "user", description = "User registration and profile"),
        (name = "item", description = "Item listing, search and comments"),
        (name = "booking", description = "Booking requests and decisions"),
        (name = "request", description = "Requests for items not yet listed")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(get_users))
        .route(
            "/users/{user_id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/items", post(create_item).get(get_owner_items))
        .route("/items/search", get(search_items))
        .route("/items/{item_id}", get(get_item).patch(update_item))
        .route("/items/{item_id}/comment", post(add_comment))
        .route("/bookings", post(create_booking).get(get_booker_bookings))
        .route("/bookings/owner", get(get_owner_bookings))
        .route("/bookings/{booking_id}", get(get_booking).patch(decide_booking))
        .route("/requests", post(create_request).get(get_own_requests))
        .route("/requests/all", get(get_all_requests))
        .route("/requests/{request_id}", get(get_request))
        .route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
