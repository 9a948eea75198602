//! Request extractors shared by all controllers.
//!
//! - `sharer` - Reads the acting user from the `X-Sharer-User-Id` header
//! - `extract` - JSON, query and path extractors whose rejections become `AppError`

pub mod extract;
pub mod sharer;
