use super::*;
use test_utils::factory::helpers::create_finished_booking;

#[tokio::test]
async fn true_for_approved_past_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;
    create_finished_booking(db, item.id, booker.id).await?;

    let result = BookingRepository::new(db)
        .has_finished_booking(booker.id, item.id, now())
        .await?;

    assert!(result);

    Ok(())
}

/// Tests that waiting and still running bookings do not count.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_waiting_or_running_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;
    BookingFactory::new(db, item.id, booker.id)
        .start(hours_from_now(-3))
        .end(hours_from_now(-1))
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .start(hours_from_now(-1))
        .end(hours_from_now(1))
        .status("APPROVED")
        .build()
        .await?;

    let result = BookingRepository::new(db)
        .has_finished_booking(booker.id, item.id, now())
        .await?;

    assert!(!result);

    Ok(())
}
