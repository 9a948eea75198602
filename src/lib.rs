//! ShareIt item-sharing backend.
//!
//! The crate ships two services that share the DTOs in [`model`]:
//!
//! - **server** (`server` feature) - REST resources, business rules and persistence
//! - **gateway** (`gateway` feature) - request validation in front of the server,
//!   forwarding valid requests over HTTP

pub mod model;

#[cfg(feature = "gateway")]
pub mod gateway;

#[cfg(feature = "server")]
pub mod server;

#[cfg(any(feature = "server", feature = "gateway"))]
pub mod telemetry;
