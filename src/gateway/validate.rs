//! Request validation performed before forwarding to the server.
//!
//! Every function returns `GatewayError::BadRequest` naming the first offending field.

use chrono::NaiveDateTime;

use crate::{
    gateway::error::GatewayError,
    model::{
        booking::{BookingListParams, CreateBookingDto},
        comment::CreateCommentDto,
        item::CreateItemDto,
        page::{page_from, PageParams},
        request::CreateItemRequestDto,
        user::{CreateUserDto, UpdateUserDto},
    },
};

fn require_non_blank(value: Option<&str>, field: &str) -> Result<(), GatewayError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(()),
        _ => Err(GatewayError::BadRequest(format!(
            "Field '{}' must not be blank",
            field
        ))),
    }
}

/// Checks the shape `local@domain.tld` without whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn require_valid_email(email: &str) -> Result<(), GatewayError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(GatewayError::BadRequest(format!(
            "Invalid email address '{}'",
            email
        )))
    }
}

pub fn new_user(dto: &CreateUserDto) -> Result<(), GatewayError> {
    require_non_blank(Some(&dto.name), "name")?;
    require_non_blank(Some(&dto.email), "email")?;
    require_valid_email(&dto.email)
}

pub fn user_update(dto: &UpdateUserDto) -> Result<(), GatewayError> {
    match &dto.email {
        Some(email) => require_valid_email(email),
        None => Ok(()),
    }
}

pub fn new_item(dto: &CreateItemDto) -> Result<(), GatewayError> {
    require_non_blank(dto.name.as_deref(), "name")?;
    require_non_blank(dto.description.as_deref(), "description")?;

    if dto.available.is_none() {
        return Err(GatewayError::BadRequest(
            "Field 'available' must be provided".to_string(),
        ));
    }

    Ok(())
}

/// Validates a booking request against the current time `now`.
///
/// `itemId`, `start` and `end` must be present, both bounds must lie in the future
/// and `end` must be strictly after `start`.
pub fn new_booking(dto: &CreateBookingDto, now: NaiveDateTime) -> Result<(), GatewayError> {
    if dto.item_id.is_none() {
        return Err(GatewayError::BadRequest(
            "Field 'itemId' must be provided".to_string(),
        ));
    }

    let (Some(start), Some(end)) = (dto.start, dto.end) else {
        return Err(GatewayError::BadRequest(
            "Booking start and end must be provided".to_string(),
        ));
    };

    if start <= now {
        return Err(GatewayError::BadRequest(
            "Booking start must be in the future".to_string(),
        ));
    }
    if end <= now {
        return Err(GatewayError::BadRequest(
            "Booking end must be in the future".to_string(),
        ));
    }
    if end <= start {
        return Err(GatewayError::BadRequest(
            "Booking end must be after its start".to_string(),
        ));
    }

    Ok(())
}

pub fn booking_list(params: &BookingListParams) -> Result<(), GatewayError> {
    params.state().map_err(GatewayError::BadRequest)?;
    page(&params.page_params())
}

pub fn page(params: &PageParams) -> Result<(), GatewayError> {
    page_from(params.from, params.size)
        .map(|_| ())
        .map_err(GatewayError::BadRequest)
}

pub fn comment(dto: &CreateCommentDto) -> Result<(), GatewayError> {
    require_non_blank(Some(&dto.text), "text")
}

pub fn item_request(dto: &CreateItemRequestDto) -> Result<(), GatewayError> {
    require_non_blank(Some(&dto.description), "description")
}
