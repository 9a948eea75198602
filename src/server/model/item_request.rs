//! Item request domain models and parameters.

use chrono::NaiveDateTime;

use crate::{model::request::ItemRequestDto, server::model::item::Item};

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequest {
    pub id: i32,
    pub description: String,
    pub requester_id: i32,
    pub created: NaiveDateTime,
}

impl ItemRequest {
    pub fn from_entity(entity: entity::item_request::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            requester_id: entity.requester_id,
            created: entity.created,
        }
    }
}

/// Item request with the items other users listed in answer to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequestWithItems {
    pub request: ItemRequest,
    pub items: Vec<Item>,
}

impl ItemRequestWithItems {
    pub fn into_dto(self) -> ItemRequestDto {
        ItemRequestDto {
            id: self.request.id,
            description: self.request.description,
            created: self.request.created,
            items: self.items.into_iter().map(|i| i.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateItemRequestParams {
    pub requester_id: i32,
    pub description: String,
}
