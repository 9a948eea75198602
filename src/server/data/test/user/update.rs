use super::*;

/// Tests updating only the name of a user.
///
/// Expected: Ok with new name and unchanged email
#[tokio::test]
async fn updates_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: user.id,
            name: Some("Renamed".to_string()),
            email: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests an update without any fields.
///
/// Expected: Ok with the stored user unchanged
#[tokio::test]
async fn empty_update_returns_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: user.id,
            name: None,
            email: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, user.name);
    assert_eq!(updated.email, user.email);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shareit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: 42,
            name: Some("Ghost".to_string()),
            email: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
