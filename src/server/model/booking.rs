//! Booking domain models and parameters.
//!
//! A booking reserves an item for a time window. It starts out `Waiting` and the
//! item owner moves it exactly once to `Approved` or `Rejected`.

use chrono::NaiveDateTime;
use sea_orm::DbErr;
use std::str::FromStr;

use crate::{
    model::booking::{BookingDto, BookingShortDto, BookingStatusDto, CreateBookingDto},
    server::model::{item::Item, user::User},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
}

impl BookingStatus {
    /// Value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    pub fn from_decision(approved: bool) -> Self {
        if approved {
            Self::Approved
        } else {
            Self::Rejected
        }
    }

    pub fn into_dto(self) -> BookingStatusDto {
        match self {
            Self::Waiting => BookingStatusDto::Waiting,
            Self::Approved => BookingStatusDto::Approved,
            Self::Rejected => BookingStatusDto::Rejected,
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DbErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(Self::Waiting),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(DbErr::Custom(format!("Unknown booking status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub item_id: i32,
    pub booker_id: i32,
    pub status: BookingStatus,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted booking
    /// - `Err(DbErr::Custom)` - Stored status is not a known booking status
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            start: entity.start_date,
            end: entity.end_date,
            item_id: entity.item_id,
            booker_id: entity.booker_id,
            status: entity.status.parse()?,
        })
    }

    pub fn into_short_dto(self) -> BookingShortDto {
        BookingShortDto {
            id: self.id,
            booker_id: self.booker_id,
            start: self.start,
            end: self.end,
        }
    }
}

/// Booking with its booker and item resolved, as returned by the booking endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub booker: User,
    pub item: Item,
}

impl BookingDetails {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.booking.id,
            start: self.booking.start,
            end: self.booking.end,
            status: self.booking.status.into_dto(),
            booker: self.booker.into_dto(),
            item: self.item.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub booker_id: i32,
    pub item_id: Option<i32>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl CreateBookingParams {
    pub fn from_dto(booker_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            booker_id,
            item_id: dto.item_id,
            start: dto.start,
            end: dto.end,
        }
    }
}

/// Picks the last finished and the next upcoming booking relative to `now`.
///
/// Rejected bookings are ignored. The last booking is the one with the latest end
/// before `now`, the next one has the earliest start after `now`.
pub fn nearest_bookings(
    bookings: &[Booking],
    now: NaiveDateTime,
) -> (Option<Booking>, Option<Booking>) {
    let relevant = bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Rejected);

    let last = relevant
        .clone()
        .filter(|b| b.end < now)
        .max_by_key(|b| b.end)
        .cloned();
    let next = relevant
        .filter(|b| b.start > now)
        .min_by_key(|b| b.start)
        .cloned();

    (last, next)
}
