//! HTTP client forwarding validated requests to the ShareIt server.

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

use crate::{
    gateway::error::GatewayError,
    model::{
        api::SHARER_USER_HEADER,
        booking::{BookingListParams, CreateBookingDto},
        comment::CreateCommentDto,
        item::{CreateItemDto, SearchParams, UpdateItemDto},
        page::PageParams,
        request::CreateItemRequestDto,
        user::{CreateUserDto, UpdateUserDto},
    },
};

/// Response received from the server, relayed to the gateway's client as is.
#[derive(Debug)]
pub struct Forwarded {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for Forwarded {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        match self.content_type {
            Some(content_type) => {
                response
                    .headers_mut()
                    .insert(header::CONTENT_TYPE, content_type);
            }
            None => {
                response.headers_mut().remove(header::CONTENT_TYPE);
            }
        }
        response
    }
}

/// Client for the ShareIt server REST API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ShareItClient {
    http: Client,
    base_url: String,
}

impl ShareItClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Returns
    /// - `Ok(ShareItClient)` - Client with pooled connections
    /// - `Err(GatewayError::Upstream)` - HTTP client could not be built
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn create_user(&self, dto: &CreateUserDto) -> Result<Forwarded, GatewayError> {
        self.forward(self.request(Method::POST, "/users", None).json(dto))
            .await
    }

    pub async fn update_user(
        &self,
        user_id: i32,
        dto: &UpdateUserDto,
    ) -> Result<Forwarded, GatewayError> {
        let path = format!("/users/{}", user_id);
        self.forward(self.request(Method::PATCH, &path, None).json(dto))
            .await
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Forwarded, GatewayError> {
        let path = format!("/users/{}", user_id);
        self.forward(self.request(Method::GET, &path, None)).await
    }

    pub async fn get_users(&self) -> Result<Forwarded, GatewayError> {
        self.forward(self.request(Method::GET, "/users", None)).await
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<Forwarded, GatewayError> {
        let path = format!("/users/{}", user_id);
        self.forward(self.request(Method::DELETE, &path, None)).await
    }

    pub async fn create_item(
        &self,
        sharer_id: i32,
        dto: &CreateItemDto,
    ) -> Result<Forwarded, GatewayError> {
        self.forward(self.request(Method::POST, "/items", Some(sharer_id)).json(dto))
            .await
    }

    pub async fn update_item(
        &self,
        sharer_id: i32,
        item_id: i32,
        dto: &UpdateItemDto,
    ) -> Result<Forwarded, GatewayError> {
        let path = format!("/items/{}", item_id);
        self.forward(self.request(Method::PATCH, &path, Some(sharer_id)).json(dto))
            .await
    }

    pub async fn get_item(&self, sharer_id: i32, item_id: i32) -> Result<Forwarded, GatewayError> {
        let path = format!("/items/{}", item_id);
        self.forward(self.request(Method::GET, &path, Some(sharer_id)))
            .await
    }

    pub async fn get_owner_items(
        &self,
        sharer_id: i32,
        page: &PageParams,
    ) -> Result<Forwarded, GatewayError> {
        self.forward(self.request(Method::GET, "/items", Some(sharer_id)).query(page))
            .await
    }

    pub async fn search_items(&self, params: &SearchParams) -> Result<Forwarded, GatewayError> {
        self.forward(self.request(Method::GET, "/items/search", None).query(params))
            .await
    }

    pub async fn add_comment(
        &self,
        sharer_id: i32,
        item_id: i32,
        dto: &CreateCommentDto,
    ) -> Result<Forwarded, GatewayError> {
        let path = format!("/items/{}/comment", item_id);
        self.forward(self.request(Method::POST, &path, Some(sharer_id)).json(dto))
            .await
    }

    pub async fn create_booking(
        &self,
        sharer_id: i32,
        dto: &CreateBookingDto,
    ) -> Result<Forwarded, GatewayError> {
        self.forward(self.request(Method::POST, "/bookings", Some(sharer_id)).json(dto))
            .await
    }

    pub async fn decide_booking(
        &self,
        sharer_id: i32,
        booking_id: i32,
        approved: bool,
    ) -> Result<Forwarded, GatewayError> {
        let path = format!("/bookings/{}", booking_id);
        self.forward(
            self.request(Method::PATCH, &path, Some(sharer_id))
                .query(&[("approved", approved)]),
        )
        .await
    }

    pub async fn get_booking(
        &self,
        sharer_id: i32,
        booking_id: i32,
    ) -> Result<Forwarded, GatewayError> {
        let path = format!("/bookings/{}", booking_id);
        self.forward(self.request(Method::GET, &path, Some(sharer_id)))
            .await
    }

    pub async fn get_booker_bookings(
        &self,
        sharer_id: i32,
        params: &BookingListParams,
    ) -> Result<Forwarded, GatewayError> {
        self.forward(self.request(Method::GET, "/bookings", Some(sharer_id)).query(params))
            .await
    }

    pub async fn get_owner_bookings(
        &self,
        sharer_id: i32,
        params: &BookingListParams,
    ) -> Result<Forwarded, GatewayError> {
        self.forward(
            self.request(Method::GET, "/bookings/owner", Some(sharer_id))
                .query(params),
        )
        .await
    }

    pub async fn create_request(
        &self,
        sharer_id: i32,
        dto: &CreateItemRequestDto,
    ) -> Result<Forwarded, GatewayError> {
        self.forward(self.request(Method::POST, "/requests", Some(sharer_id)).json(dto))
            .await
    }

    pub async fn get_own_requests(&self, sharer_id: i32) -> Result<Forwarded, GatewayError> {
        self.forward(self.request(Method::GET, "/requests", Some(sharer_id)))
            .await
    }

    pub async fn get_all_requests(
        &self,
        sharer_id: i32,
        page: &PageParams,
    ) -> Result<Forwarded, GatewayError> {
        self.forward(
            self.request(Method::GET, "/requests/all", Some(sharer_id))
                .query(page),
        )
        .await
    }

    pub async fn get_request(
        &self,
        sharer_id: i32,
        request_id: i32,
    ) -> Result<Forwarded, GatewayError> {
        let path = format!("/requests/{}", request_id);
        self.forward(self.request(Method::GET, &path, Some(sharer_id)))
            .await
    }

    fn request(&self, method: Method, path: &str, sharer_id: Option<i32>) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        match sharer_id {
            Some(id) => builder.header(SHARER_USER_HEADER, id),
            None => builder,
        }
    }

    async fn forward(&self, builder: RequestBuilder) -> Result<Forwarded, GatewayError> {
        let response = builder.send().await?;

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await?;

        tracing::debug!("ShareIt server answered {}", status);

        Ok(Forwarded {
            status,
            content_type,
            body,
        })
    }
}
