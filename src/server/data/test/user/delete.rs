use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a user who owns an item.
///
/// Expected: Ok(true) and the owned item removed by the cascading foreign key
#[tokio::test]
async fn deletes_user_and_owned_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::item::create_item(db, user.id).await?;

    let deleted = UserRepository::new(db).delete(user.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Item::find().count(db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete(7).await?;

    assert!(!deleted);

    Ok(())
}
