use super::*;

/// Tests that only the owner's items are returned, in ID order.
///
/// Expected: Ok with the owner's two items
#[tokio::test]
async fn returns_only_owner_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let first = factory::item::create_item(db, owner.id).await?;
    factory::item::create_item(db, other.id).await?;
    let second = factory::item::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db).get_by_owner(owner.id, None).await?;

    let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests paging through the owner's items.
///
/// Expected: Ok with the second page containing the third item only
#[tokio::test]
async fn applies_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(factory::item::create_item(db, owner.id).await?.id);
    }

    let items = ItemRepository::new(db)
        .get_by_owner(owner.id, Some(Page { index: 1, size: 2 }))
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ids[2]);

    Ok(())
}
