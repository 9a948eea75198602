use super::*;

/// Tests that own requests come back newest first.
///
/// Expected: Ok with the newer request first and other users' requests excluded
#[tokio::test]
async fn returns_own_requests_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let older = ItemRequestFactory::new(db, requester.id)
        .created(hours_from_now(-2))
        .build()
        .await?;
    let newer = ItemRequestFactory::new(db, requester.id)
        .created(hours_from_now(-1))
        .build()
        .await?;
    factory::item_request::create_item_request(db, other.id).await?;

    let requests = ItemRequestRepository::new(db)
        .get_by_requester(requester.id)
        .await?;

    let ids: Vec<i32> = requests.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
