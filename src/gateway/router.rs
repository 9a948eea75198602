use axum::{
    routing::{get, post},
    Router,
};

use crate::gateway::{
    controller::{
        booking::{
            create_booking, decide_booking, get_booker_bookings, get_booking, get_owner_bookings,
        },
        item::{add_comment, create_item, get_item, get_owner_items, search_items, update_item},
        item_request::{create_request, get_all_requests, get_own_requests, get_request},
        user::{create_user, delete_user, get_user, get_users, update_user},
    },
    state::GatewayState,
};

/// Routes mirroring the server's REST resources.
pub fn router() -> Router<GatewayState> {
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
}
