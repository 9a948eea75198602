//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating
//! entities together with their dependencies.

use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{booking::BookingFactory, item, user};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Current UTC time without offset, as stored in the database.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Time `hours` from now; negative values point to the past.
pub fn hours_from_now(hours: i64) -> NaiveDateTime {
    now() + Duration::hours(hours)
}

/// Creates an owner, an item owned by them and a second user who can book it.
///
/// # Returns
/// - `Ok((owner, item, booker))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_item_with_booker(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::item::Model, entity::user::Model), DbErr> {
    let owner = user::create_user(db).await?;
    let item = item::create_item(db, owner.id).await?;
    let booker = user::create_user(db).await?;

    Ok((owner, item, booker))
}

/// Creates an approved booking of `item_id` by `booker_id` that ended an hour ago.
pub async fn create_finished_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id)
        .start(hours_from_now(-3))
        .end(hours_from_now(-1))
        .status("APPROVED")
        .build()
        .await
}
