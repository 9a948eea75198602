use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::item::ItemDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ItemRequestDto {
    pub id: i32,
    pub description: String,
    pub created: NaiveDateTime,
    /// Items listed in answer to this request.
    pub items: Vec<ItemDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateItemRequestDto {
    #[serde(default)]
    pub description: String,
}
