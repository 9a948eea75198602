//! Domain models used by the service and data layers.
//!
//! Each submodule provides the domain type for one resource with `from_entity`
//! conversion at the repository boundary and `into_dto` conversion at the
//! controller boundary, plus the parameter types services accept.

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;
