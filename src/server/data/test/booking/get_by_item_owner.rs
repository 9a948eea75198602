use super::*;

/// Tests that bookings are found through the owner of the booked item.
///
/// Expected: Ok with bookings of the owner's item only
#[tokio::test]
async fn returns_bookings_of_owned_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, booker) = create_item_with_booker(db).await?;
    let other_item = factory::item::create_item(db, booker.id).await?;
    let booking = factory::booking::create_booking(db, item.id, booker.id).await?;
    factory::booking::create_booking(db, other_item.id, owner.id).await?;

    let bookings = BookingRepository::new(db)
        .get_by_item_owner(owner.id, BookingState::All, now(), None)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, booking.id);

    Ok(())
}

#[tokio::test]
async fn filters_waiting_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, booker) = create_item_with_booker(db).await?;
    let waiting = factory::booking::create_booking(db, item.id, booker.id).await?;
    BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .build()
        .await?;

    let bookings = BookingRepository::new(db)
        .get_by_item_owner(owner.id, BookingState::Waiting, now(), None)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, waiting.id);

    Ok(())
}
