use super::*;

/// Creates a past, a current and a future booking by the same booker.
///
/// Returns `(booker_id, past, current, future)`.
async fn create_timeline(
    db: &sea_orm::DatabaseConnection,
) -> Result<(i32, i32, i32, i32), DbErr> {
    let (_, item, booker) = create_item_with_booker(db).await?;

    let past = BookingFactory::new(db, item.id, booker.id)
        .start(hours_from_now(-5))
        .end(hours_from_now(-4))
        .status("APPROVED")
        .build()
        .await?;
    let current = BookingFactory::new(db, item.id, booker.id)
        .start(hours_from_now(-1))
        .end(hours_from_now(1))
        .status("APPROVED")
        .build()
        .await?;
    let future = BookingFactory::new(db, item.id, booker.id)
        .start(hours_from_now(4))
        .end(hours_from_now(5))
        .status("REJECTED")
        .build()
        .await?;

    Ok((booker.id, past.id, current.id, future.id))
}

/// Tests that all bookings are returned with the latest start first.
///
/// Expected: Ok with future, current, past
#[tokio::test]
async fn all_orders_by_start_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker_id, past, current, future) = create_timeline(db).await?;

    let bookings = BookingRepository::new(db)
        .get_by_booker(booker_id, BookingState::All, now(), None)
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![future, current, past]);

    Ok(())
}

/// Tests each time-based and status-based filter.
///
/// Expected: Ok with exactly the matching booking per state
#[tokio::test]
async fn filters_by_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker_id, past, current, future) = create_timeline(db).await?;
    let repo = BookingRepository::new(db);

    let cases = [
        (BookingState::Past, vec![past]),
        (BookingState::Current, vec![current]),
        (BookingState::Future, vec![future]),
        (BookingState::Rejected, vec![future]),
        (BookingState::Waiting, vec![]),
    ];

    for (state, expected) in cases {
        let bookings = repo.get_by_booker(booker_id, state, now(), None).await?;
        let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
        assert_eq!(ids, expected, "state {}", state);
    }

    Ok(())
}
