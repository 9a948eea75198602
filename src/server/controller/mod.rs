//! HTTP request handlers.
//!
//! Controllers extract the acting user and payload, convert DTOs into service params,
//! call the matching service and convert the domain result back into a DTO. Every
//! handler carries a `#[utoipa::path]` annotation collected by `router::ApiDoc`.

pub mod booking;
pub mod item;
pub mod item_request;
pub mod user;

#[cfg(test)]
mod test;
