//! Gateway request handlers.
//!
//! Each handler validates its input with [`crate::gateway::validate`] and forwards the
//! request through [`crate::gateway::client::ShareItClient`], relaying the server's
//! response unchanged.

pub mod booking;
pub mod item;
pub mod item_request;
pub mod user;
