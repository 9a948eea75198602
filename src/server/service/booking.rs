//! Booking service for business logic.
//!
//! Validates booking windows, enforces the `Waiting -> Approved | Rejected` transition
//! and restricts visibility of a booking to its booker and the item owner.

use chrono::{NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{booking::BookingState, page::Page},
    server::{
        data::{booking::BookingRepository, item::ItemRepository, user::UserRepository},
        error::AppError,
        model::booking::{Booking, BookingDetails, BookingStatus, CreateBookingParams},
        service::{item::ItemService, user::UserService},
    },
};

pub struct BookingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requests a booking of an item.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - The new booking in the `Waiting` status
    /// - `Err(AppError::NotFound)` - Booker or item does not exist, or the booker owns the item
    /// - `Err(AppError::BadRequest)` - Missing fields, end not after start, or item unavailable
    pub async fn create(&self, params: CreateBookingParams) -> Result<BookingDetails, AppError> {
        let booker = UserService::new(self.db).get(params.booker_id).await?;

        let (Some(item_id), Some(start), Some(end)) = (params.item_id, params.start, params.end)
        else {
            return Err(AppError::BadRequest(
                "Booking item, start and end must be filled".to_string(),
            ));
        };
        if end <= start {
            return Err(AppError::BadRequest(format!(
                "Booking end {} must be after start {}",
                end, start
            )));
        }

        let item = ItemService::new(self.db).get_item(item_id).await?;
        if !item.available {
            return Err(AppError::BadRequest(format!(
                "Item {} is not available for booking",
                item.id
            )));
        }
        if item.owner_id == booker.id {
            return Err(AppError::NotFound(format!(
                "Owner cannot book their own item {}",
                item.id
            )));
        }

        let booking = BookingRepository::new(self.db)
            .create(booker.id, item.id, start, end)
            .await?;

        tracing::debug!("User {} requested booking {} of item {}", booker.id, booking.id, item.id);

        Ok(BookingDetails {
            booking,
            booker,
            item,
        })
    }

    /// Approves or rejects a waiting booking on behalf of the item owner.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - The decided booking
    /// - `Err(AppError::NotFound)` - No such booking, or `user_id` does not own the item
    /// - `Err(AppError::BadRequest)` - The booking has already been decided
    pub async fn decide(
        &self,
        user_id: i32,
        booking_id: i32,
        approved: bool,
    ) -> Result<BookingDetails, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = self.get_booking(booking_id).await?;
        let item = ItemService::new(self.db).get_item(booking.item_id).await?;
        if item.owner_id != user_id {
            return Err(AppError::NotFound(format!(
                "Booking with id {} not found for owner {}",
                booking_id, user_id
            )));
        }
        if booking.status != BookingStatus::Waiting {
            return Err(already_decided(booking_id));
        }

        let booking = repo
            .decide(booking_id, BookingStatus::from_decision(approved))
            .await?
            .ok_or_else(|| already_decided(booking_id))?;
        let booker = UserService::new(self.db).get(booking.booker_id).await?;

        tracing::debug!("Booking {} is now {}", booking.id, booking.status.as_str());

        Ok(BookingDetails {
            booking,
            booker,
            item,
        })
    }

    /// Retrieves a booking visible to `user_id`.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - The booking
    /// - `Err(AppError::NotFound)` - No such booking, or `user_id` is neither booker nor owner
    pub async fn get(&self, user_id: i32, booking_id: i32) -> Result<BookingDetails, AppError> {
        let booking = self.get_booking(booking_id).await?;
        let item = ItemService::new(self.db).get_item(booking.item_id).await?;

        if booking.booker_id != user_id && item.owner_id != user_id {
            return Err(booking_not_found(booking_id));
        }

        let booker = UserService::new(self.db).get(booking.booker_id).await?;

        Ok(BookingDetails {
            booking,
            booker,
            item,
        })
    }

    /// Lists the bookings made by `booker_id`, latest start first.
    ///
    /// # Returns
    /// - `Ok(Vec<BookingDetails>)` - Matching bookings
    /// - `Err(AppError::NotFound)` - The user does not exist
    pub async fn get_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        page: Option<Page>,
    ) -> Result<Vec<BookingDetails>, AppError> {
        UserService::new(self.db).get(booker_id).await?;

        let bookings = BookingRepository::new(self.db)
            .get_by_booker(booker_id, state, now(), page)
            .await?;

        self.with_details(bookings).await
    }

    /// Lists the bookings of items owned by `owner_id`, latest start first.
    ///
    /// # Returns
    /// - `Ok(Vec<BookingDetails>)` - Matching bookings
    /// - `Err(AppError::NotFound)` - The user does not exist
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        page: Option<Page>,
    ) -> Result<Vec<BookingDetails>, AppError> {
        UserService::new(self.db).get(owner_id).await?;

        let bookings = BookingRepository::new(self.db)
            .get_by_item_owner(owner_id, state, now(), page)
            .await?;

        self.with_details(bookings).await
    }

    async fn get_booking(&self, booking_id: i32) -> Result<Booking, AppError> {
        BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| booking_not_found(booking_id))
    }

    /// Resolves bookers and items for a list of bookings with one query each.
    async fn with_details(&self, bookings: Vec<Booking>) -> Result<Vec<BookingDetails>, AppError> {
        let booker_ids = bookings.iter().map(|b| b.booker_id).collect();
        let item_ids = bookings.iter().map(|b| b.item_id).collect();

        let bookers = UserRepository::new(self.db).find_by_ids(booker_ids).await?;
        let items = ItemRepository::new(self.db).find_by_ids(item_ids).await?;

        bookings
            .into_iter()
            .map(|booking| {
                let booker = bookers.get(&booking.booker_id).cloned().ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Booker {} of booking {} missing",
                        booking.booker_id, booking.id
                    ))
                })?;
                let item = items.get(&booking.item_id).cloned().ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Item {} of booking {} missing",
                        booking.item_id, booking.id
                    ))
                })?;

                Ok(BookingDetails {
                    booking,
                    booker,
                    item,
                })
            })
            .collect()
    }
}

fn booking_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Booking with id {} not found", id))
}

fn already_decided(id: i32) -> AppError {
    AppError::BadRequest(format!("Booking {} has already been decided", id))
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
