use super::*;

#[tokio::test]
async fn persists_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let created = factory::item::create_item(db, owner.id).await?;

    let repo = ItemRepository::new(db);
    let mut item = repo.find_by_id(created.id).await?.unwrap();
    item.name = "Updated".to_string();
    item.available = false;

    repo.update(item).await?;

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored.name, "Updated");
    assert_eq!(stored.description, created.description);
    assert!(!stored.available);

    Ok(())
}
