use super::*;

#[tokio::test]
async fn creates_item_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;

    let item = ItemRepository::new(db)
        .create(owner.id, "Drill".to_string(), "Cordless drill".to_string(), true, None)
        .await?;

    assert!(item.id > 0);
    assert_eq!(item.owner_id, owner.id);
    assert_eq!(item.name, "Drill");
    assert!(item.available);
    assert!(item.request_id.is_none());

    Ok(())
}

/// Tests linking a new item to the request it answers.
///
/// Expected: Ok with request_id stored
#[tokio::test]
async fn creates_item_answering_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::create_user(db).await?;
    let owner = factory::user::create_user(db).await?;
    let request = factory::item_request::create_item_request(db, requester.id).await?;

    let item = ItemRepository::new(db)
        .create(owner.id, "Tent".to_string(), "Two person tent".to_string(), true, Some(request.id))
        .await?;

    assert_eq!(item.request_id, Some(request.id));

    Ok(())
}
