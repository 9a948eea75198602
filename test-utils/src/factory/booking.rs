//! Booking factory for creating test booking entities.
//!
//! Bookings default to a `WAITING` booking starting in one day and lasting one day.

use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::hours_from_now;

pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    booker_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
    status: String,
}

impl<'a> BookingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, item_id: i32, booker_id: i32) -> Self {
        Self {
            db,
            item_id,
            booker_id,
            start: hours_from_now(24),
            end: hours_from_now(48),
            status: "WAITING".to_string(),
        }
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = end;
        self
    }

    /// Sets the stored status, one of `WAITING`, `APPROVED` or `REJECTED`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start_date: ActiveValue::Set(self.start),
            end_date: ActiveValue::Set(self.end),
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a future `WAITING` booking.
pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}
