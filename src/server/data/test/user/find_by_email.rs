use super::*;

#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let found = UserRepository::new(db).find_by_email(&user.email).await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let found = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests batch lookup used to resolve booking details.
///
/// Expected: Ok with only the existing IDs present in the map
#[tokio::test]
async fn find_by_ids_skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let users = UserRepository::new(db)
        .find_by_ids(vec![user.id, user.id + 100])
        .await?;

    assert_eq!(users.len(), 1);
    assert!(users.contains_key(&user.id));

    Ok(())
}
