use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Header carrying the ID of the user on whose behalf a request is made.
pub const SHARER_USER_HEADER: &str = "X-Sharer-User-Id";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub error: String,
}

/// Parses the value of the [`SHARER_USER_HEADER`] header into a user ID.
///
/// # Returns
/// - `Ok(i32)` - Parsed user ID
/// - `Err(String)` - Message describing why the value was rejected
pub fn parse_sharer_user_id(value: Option<&str>) -> Result<i32, String> {
    let Some(value) = value else {
        return Err(format!("Missing required header {}", SHARER_USER_HEADER));
    };

    value
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("Invalid {} header value '{}'", SHARER_USER_HEADER, value))
}
