//! Item domain models and parameters.
//!
//! Items are listed by an owner and may answer an item request. When returned to
//! clients they are decorated with their nearest bookings and their comments,
//! see [`ItemWithBookings`].

use crate::{
    model::item::{CreateItemDto, ItemDto, ItemWithBookingsDto, UpdateItemDto},
    server::model::{booking::Booking, comment::Comment},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Whether the item can currently be booked.
    pub available: bool,
    pub owner_id: i32,
    /// Item request this item was listed in answer to.
    pub request_id: Option<i32>,
}

impl Item {
    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            available: self.available,
            request_id: self.request_id,
        }
    }

    /// Converts an entity model to an item domain model at the repository boundary.
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            available: entity.available,
            owner_id: entity.owner_id,
            request_id: entity.request_id,
        }
    }
}

/// Item together with the booking context shown to clients.
///
/// `last_booking` and `next_booking` stay `None` unless the viewer owns the item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWithBookings {
    pub item: Item,
    pub last_booking: Option<Booking>,
    pub next_booking: Option<Booking>,
    pub comments: Vec<Comment>,
}

impl ItemWithBookings {
    pub fn into_dto(self) -> ItemWithBookingsDto {
        ItemWithBookingsDto {
            id: self.item.id,
            name: self.item.name,
            description: self.item.description,
            available: self.item.available,
            request_id: self.item.request_id,
            last_booking: self.last_booking.map(|b| b.into_short_dto()),
            next_booking: self.next_booking.map(|b| b.into_short_dto()),
            comments: self.comments.into_iter().map(|c| c.into_dto()).collect(),
        }
    }
}

/// Parameters for listing a new item.
///
/// Fields mirror the request payload and are validated by the item service.
#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub owner_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub request_id: Option<i32>,
}

impl CreateItemParams {
    pub fn from_dto(owner_id: i32, dto: CreateItemDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            available: dto.available,
            request_id: dto.request_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateItemParams {
    pub id: i32,
    /// User performing the update, must be the owner.
    pub user_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl UpdateItemParams {
    pub fn from_dto(id: i32, user_id: i32, dto: UpdateItemDto) -> Self {
        Self {
            id,
            user_id,
            name: dto.name,
            description: dto.description,
            available: dto.available,
        }
    }
}
