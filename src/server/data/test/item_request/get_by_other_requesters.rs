use super::*;

/// Tests that a user's own requests are excluded.
///
/// Expected: Ok with the other user's request only
#[tokio::test]
async fn excludes_own_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::item_request::create_item_request(db, user.id).await?;
    let foreign = factory::item_request::create_item_request(db, other.id).await?;

    let requests = ItemRequestRepository::new(db)
        .get_by_other_requesters(user.id, None)
        .await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, foreign.id);

    Ok(())
}

#[tokio::test]
async fn applies_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let mut ids = Vec::new();
    for hours in [-3, -2, -1] {
        let request = ItemRequestFactory::new(db, other.id)
            .created(hours_from_now(hours))
            .build()
            .await?;
        ids.push(request.id);
    }

    let requests = ItemRequestRepository::new(db)
        .get_by_other_requesters(user.id, Some(Page { index: 0, size: 2 }))
        .await?;

    let returned: Vec<i32> = requests.iter().map(|r| r.id).collect();
    assert_eq!(returned, vec![ids[2], ids[1]]);

    Ok(())
}
