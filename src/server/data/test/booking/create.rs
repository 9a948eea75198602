use super::*;

/// Tests that new bookings start out waiting.
///
/// Expected: Ok with status Waiting and the requested window
#[tokio::test]
async fn creates_waiting_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;
    let start = hours_from_now(1);
    let end = hours_from_now(2);

    let booking = BookingRepository::new(db)
        .create(booker.id, item.id, start, end)
        .await?;

    assert_eq!(booking.status, BookingStatus::Waiting);
    assert_eq!(booking.item_id, item.id);
    assert_eq!(booking.booker_id, booker.id);
    assert_eq!(booking.start, start);
    assert_eq!(booking.end, end);

    Ok(())
}
