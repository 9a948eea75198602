//! Data transfer objects shared by the server and the gateway.
//!
//! Field names follow the JSON contract of the public API (camelCase). Schema derives
//! for the OpenAPI document are only compiled with the `server` feature.

pub mod api;
pub mod booking;
pub mod comment;
pub mod item;
pub mod page;
pub mod request;
pub mod user;
