//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, booking state transitions, email uniqueness
//! - **Orchestration**: Coordinating several repositories to assemble responses
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod booking;
pub mod item;
pub mod item_request;
pub mod user;

#[cfg(test)]
mod test;

use crate::server::error::AppError;

/// Returns the value unchanged if it contains non-whitespace characters.
pub(crate) fn require_non_blank(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}
