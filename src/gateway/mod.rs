//! Validating front door for the ShareIt server.
//!
//! The gateway exposes the same routes as the server. Each handler checks the request
//! (sharer header, body fields, booking window, pagination, booking state) and only then
//! forwards it through [`client::ShareItClient`]. The server's status code and JSON body
//! are relayed unchanged, so the gateway holds no business logic and no storage.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
pub mod validate;
