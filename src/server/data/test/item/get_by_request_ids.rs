use super::*;
use test_utils::factory::item::ItemFactory;

#[tokio::test]
async fn returns_items_answering_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::create_user(db).await?;
    let owner = factory::user::create_user(db).await?;
    let request = factory::item_request::create_item_request(db, requester.id).await?;
    let answer = ItemFactory::new(db, owner.id)
        .request_id(request.id)
        .build()
        .await?;
    factory::item::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db)
        .get_by_request_ids(vec![request.id])
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, answer.id);
    assert_eq!(items[0].request_id, Some(request.id));

    Ok(())
}

#[tokio::test]
async fn returns_empty_for_no_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let items = ItemRepository::new(db).get_by_request_ids(vec![]).await?;

    assert!(items.is_empty());

    Ok(())
}
