use super::*;

#[tokio::test]
async fn stores_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;
    let created = factory::booking::create_booking(db, item.id, booker.id).await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .decide(created.id, BookingStatus::Approved)
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::Approved);
    assert_eq!(updated.start, created.start_date);
    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Approved);

    Ok(())
}

/// Tests that a decided booking is left untouched.
///
/// Expected: Ok(None) and the stored status unchanged
#[tokio::test]
async fn skips_decided_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;
    let created = BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatus::Rejected.as_str())
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo.decide(created.id, BookingStatus::Approved).await?;

    assert!(result.is_none());
    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Rejected);

    Ok(())
}

/// Tests an unknown booking ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_booking_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingRepository::new(db)
        .decide(404, BookingStatus::Approved)
        .await?;

    assert!(result.is_none());

    Ok(())
}
